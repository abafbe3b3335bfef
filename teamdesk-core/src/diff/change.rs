//! Before/after delta of one matched participant.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::object::participant::{ConfirmStatus, ParticipantKey};

/// Confirmation state of one participant before and after an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationChange {
    /// Identity the change was matched under.
    pub participant: ParticipantKey,
    pub old_status: ConfirmStatus,
    pub new_status: ConfirmStatus,
    pub old_message: Option<String>,
    pub new_message: Option<String>,
}

impl ConfirmationChange {
    /// Compare the confirmation state of a matched pair. Returns `None` when
    /// neither status nor message moved.
    pub(crate) fn detect(
        participant: ParticipantKey,
        old_status: ConfirmStatus,
        new_status: ConfirmStatus,
        old_message: Option<&str>,
        new_message: Option<&str>,
    ) -> Option<ConfirmationChange> {
        if old_status == new_status && old_message == new_message {
            return None;
        }
        Some(ConfirmationChange {
            participant,
            old_status,
            new_status,
            old_message: old_message.map(String::from),
            new_message: new_message.map(String::from),
        })
    }
}

impl fmt::Display for ConfirmationChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.old_status, self.new_status)
    }
}
