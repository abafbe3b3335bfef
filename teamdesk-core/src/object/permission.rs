//! Folder permission grants.

use serde::{Deserialize, Serialize};

/// How much of a folder's content an access level covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AccessLevel {
    #[default]
    None,
    /// Only objects created by the grantee.
    Own,
    All,
}

/// A single permission grant on a folder, for a user or a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    /// User or group id the grant applies to.
    pub entity: i32,
    pub group: bool,
    /// Folder administrators may rename, move and re-share the folder.
    pub admin: bool,
    pub read: AccessLevel,
    pub write: AccessLevel,
    pub delete: AccessLevel,
}

impl Permission {
    pub fn for_user(entity: i32) -> Permission {
        Permission {
            entity,
            ..Permission::default()
        }
    }

    pub fn for_group(entity: i32) -> Permission {
        Permission {
            entity,
            group: true,
            ..Permission::default()
        }
    }

    pub fn can_read_all(&self) -> bool {
        self.read >= AccessLevel::All
    }

    pub fn can_write_own(&self) -> bool {
        self.write >= AccessLevel::Own
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_levels_are_ordered() {
        assert!(AccessLevel::All > AccessLevel::Own);
        assert!(AccessLevel::Own > AccessLevel::None);
    }

    #[test]
    fn test_default_grant_allows_nothing() {
        let p = Permission::for_user(3);
        assert!(!p.admin);
        assert!(!p.can_read_all());
        assert!(!p.can_write_own());
    }
}
