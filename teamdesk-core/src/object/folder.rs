//! Folders and their permission grants.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::columns::ColumnId;
use crate::columns::folder;
use crate::compare;
use crate::error::TeamdeskResult;
use crate::fields::{FieldAccess, FieldSet, own_set, own_value};
use crate::object::levels::ObjectFields;
use crate::object::permission::Permission;
use crate::object::{deserialize_fields, serialize_fields};
use crate::schema::{self, Schema};
use crate::value::FieldValue;

/// Which kind of items a folder holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FolderModule {
    Calendar = 1,
    Contact = 2,
    Task = 3,
}

impl FolderModule {
    pub fn from_i32(value: i32) -> Option<FolderModule> {
        match value {
            1 => Some(FolderModule::Calendar),
            2 => Some(FolderModule::Contact),
            3 => Some(FolderModule::Task),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> i32 {
        *self as i32
    }
}

/// Visibility class of a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FolderType {
    Private = 1,
    Public = 2,
    Shared = 3,
}

impl FolderType {
    pub fn from_i32(value: i32) -> Option<FolderType> {
        match value {
            1 => Some(FolderType::Private),
            2 => Some(FolderType::Public),
            3 => Some(FolderType::Shared),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> i32 {
        *self as i32
    }
}

/// A groupware folder.
#[derive(Debug, Clone)]
pub struct Folder {
    fields: FieldSet,
}

impl Folder {
    pub fn new() -> Folder {
        Folder {
            fields: FieldSet::new(&schema::FOLDER),
        }
    }

    pub fn folder_name(&self) -> Option<&str> {
        own_value(self, folder::FOLDER_NAME).and_then(FieldValue::as_text)
    }

    pub fn set_folder_name(&mut self, name: &str) {
        own_set(self, folder::FOLDER_NAME, name.into());
    }

    pub fn module(&self) -> Option<FolderModule> {
        own_value(self, folder::MODULE)
            .and_then(FieldValue::as_int)
            .and_then(FolderModule::from_i32)
    }

    pub fn set_module(&mut self, module: FolderModule) {
        own_set(self, folder::MODULE, module.as_i32().into());
    }

    pub fn folder_type(&self) -> Option<FolderType> {
        own_value(self, folder::FOLDER_TYPE)
            .and_then(FieldValue::as_int)
            .and_then(FolderType::from_i32)
    }

    pub fn set_folder_type(&mut self, kind: FolderType) {
        own_set(self, folder::FOLDER_TYPE, kind.as_i32().into());
    }

    pub fn permissions(&self) -> Option<&[Permission]> {
        own_value(self, folder::PERMISSIONS).and_then(FieldValue::as_permissions)
    }

    pub fn set_permissions(&mut self, permissions: impl Into<Vec<Permission>>) {
        own_set(self, folder::PERMISSIONS, permissions.into().into());
    }

    /// The grant for a user or group id, if one was assigned.
    pub fn permission_for(&self, entity: i32) -> Option<&Permission> {
        self.permissions()?
            .iter()
            .find(|grant| grant.entity == entity)
    }

    pub fn has_subfolders(&self) -> bool {
        own_value(self, folder::SUBFOLDER_FLAG)
            .and_then(FieldValue::as_bool)
            .unwrap_or(false)
    }

    pub fn set_has_subfolders(&mut self, flag: bool) {
        own_set(self, folder::SUBFOLDER_FLAG, flag.into());
    }
}

impl Default for Folder {
    fn default() -> Folder {
        Folder::new()
    }
}

impl FieldAccess for Folder {
    fn schema(&self) -> &'static Schema {
        self.fields.schema()
    }

    fn set(&mut self, column: ColumnId, value: FieldValue) -> TeamdeskResult<()> {
        self.fields.set(column, value)
    }

    fn get(&self, column: ColumnId) -> TeamdeskResult<Option<&FieldValue>> {
        self.fields.get(column)
    }

    fn contains(&self, column: ColumnId) -> TeamdeskResult<bool> {
        self.fields.contains(column)
    }

    fn remove(&mut self, column: ColumnId) -> TeamdeskResult<Option<FieldValue>> {
        self.fields.remove(column)
    }

    fn reset(&mut self) {
        self.fields.reset();
    }
}

impl ObjectFields for Folder {}

impl PartialEq for Folder {
    fn eq(&self, other: &Folder) -> bool {
        compare::identity_equals(self, other)
    }
}

impl Eq for Folder {}

impl Hash for Folder {
    fn hash<H: Hasher>(&self, state: &mut H) {
        compare::fold_fields(self, state);
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.folder_name().unwrap_or("(unnamed folder)"))
    }
}

impl Serialize for Folder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_fields(&self.fields, serializer)
    }
}

impl<'de> Deserialize<'de> for Folder {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Folder, D::Error> {
        Ok(Folder {
            fields: deserialize_fields(&schema::FOLDER, deserializer)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::permission::AccessLevel;

    #[test]
    fn test_permission_lookup_by_entity() {
        let mut f = Folder::new();
        let mut grant = Permission::for_user(12);
        grant.read = AccessLevel::All;
        f.set_permissions(vec![grant, Permission::for_group(8)]);

        assert!(f.permission_for(12).unwrap().can_read_all());
        assert!(f.permission_for(8).unwrap().group);
        assert!(f.permission_for(99).is_none());
    }

    #[test]
    fn test_folder_has_no_folder_child_level() {
        let f = Folder::new();
        assert!(f.get(crate::columns::folder_child::FOLDER_ID).is_err());
    }

    #[test]
    fn test_module_roundtrip() {
        let mut f = Folder::new();
        f.set_module(FolderModule::Calendar);
        assert_eq!(f.module(), Some(FolderModule::Calendar));
    }
}
