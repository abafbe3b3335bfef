//! Participant types attached to calendar items.
//!
//! Internal users carry a numeric identity; external participants are known
//! only by email address. Matching across two snapshots of the same item
//! always goes through [`ParticipantKey`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel for participants without a numeric identity.
pub const NO_ID: i32 = 0;

/// Confirmation state of a participant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfirmStatus {
    #[default]
    None,
    Accepted,
    Declined,
    Tentative,
}

impl ConfirmStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfirmStatus::None => "none",
            ConfirmStatus::Accepted => "accepted",
            ConfirmStatus::Declined => "declined",
            ConfirmStatus::Tentative => "tentative",
        }
    }
}

impl fmt::Display for ConfirmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of principal a participant entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticipantKind {
    User,
    Group,
    Resource,
    External,
}

/// Stable identity used to pair participants across two snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticipantKey {
    Id(i32),
    /// Lowercased email address.
    Email(String),
}

impl ParticipantKey {
    /// Key for a numeric id with email fallback. Returns `None` when neither
    /// identity is usable.
    fn from_parts(id: i32, email: Option<&str>) -> Option<ParticipantKey> {
        if id != NO_ID {
            return Some(ParticipantKey::Id(id));
        }
        email.map(|e| ParticipantKey::Email(e.to_lowercase()))
    }

    /// Key derived from an email address alone.
    pub fn from_email(email: &str) -> ParticipantKey {
        ParticipantKey::Email(email.to_lowercase())
    }
}

/// A participant entry on a calendar item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    pub id: i32,
    pub kind: ParticipantKind,
    pub email_address: Option<String>,
    pub display_name: Option<String>,
}

impl Participant {
    pub fn user(id: i32) -> Participant {
        Participant {
            id,
            kind: ParticipantKind::User,
            email_address: None,
            display_name: None,
        }
    }

    pub fn external(email: &str) -> Participant {
        Participant {
            id: NO_ID,
            kind: ParticipantKind::External,
            email_address: Some(email.to_string()),
            display_name: None,
        }
    }

    /// Matching identity: numeric id when present, else lowercased email.
    pub fn key(&self) -> Option<ParticipantKey> {
        ParticipantKey::from_parts(self.id, self.email_address.as_deref())
    }
}

/// An internal user on a calendar item, with confirmation state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserParticipant {
    pub id: i32,
    pub confirm: ConfirmStatus,
    pub confirm_message: Option<String>,
}

impl UserParticipant {
    pub fn new(id: i32) -> UserParticipant {
        UserParticipant {
            id,
            confirm: ConfirmStatus::None,
            confirm_message: None,
        }
    }

    pub fn with_confirm(id: i32, confirm: ConfirmStatus) -> UserParticipant {
        UserParticipant {
            id,
            confirm,
            confirm_message: None,
        }
    }
}

/// An external participant that can confirm, identified by email only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfirmableParticipant {
    pub email_address: String,
    pub display_name: Option<String>,
    pub confirm: ConfirmStatus,
    pub confirm_message: Option<String>,
}

impl ConfirmableParticipant {
    pub fn new(email: &str, confirm: ConfirmStatus) -> ConfirmableParticipant {
        ConfirmableParticipant {
            email_address: email.to_string(),
            display_name: None,
            confirm,
            confirm_message: None,
        }
    }

    pub fn key(&self) -> ParticipantKey {
        ParticipantKey::from_email(&self.email_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_key_prefers_numeric_id() {
        let mut p = Participant::user(17);
        p.email_address = Some("Someone@Example.com".to_string());
        assert_eq!(p.key(), Some(ParticipantKey::Id(17)));
    }

    #[test]
    fn test_external_participant_key_is_case_insensitive() {
        let a = Participant::external("Alice@Example.COM");
        let b = Participant::external("alice@example.com");
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_participant_without_identity_has_no_key() {
        let p = Participant {
            id: NO_ID,
            kind: ParticipantKind::Resource,
            email_address: None,
            display_name: Some("Room 2".to_string()),
        };
        assert_eq!(p.key(), None);
    }
}
