//! Differ for external participants' confirmations.

use std::collections::HashMap;

use crate::columns::calendar;
use crate::diff::{ConfirmationChange, Difference};
use crate::object::calendar::CalendarFields;
use crate::object::participant::{ConfirmableParticipant, ParticipantKey};

/// Compare the confirmable-participant lists of two snapshots. External
/// participants have no numeric identity; the email address alone is the key.
pub(crate) fn difference<T: CalendarFields>(
    original: &T,
    update: &T,
) -> Option<Difference<ConfirmableParticipant, ConfirmationChange>> {
    if !update.has_confirmations() {
        return None;
    }

    let old_list = original.confirmations().unwrap_or_default();
    let new_list = update.confirmations().unwrap_or_default();

    let old_by_email: HashMap<ParticipantKey, &ConfirmableParticipant> =
        old_list.iter().map(|p| (p.key(), p)).collect();
    let new_by_email: HashMap<ParticipantKey, &ConfirmableParticipant> =
        new_list.iter().map(|p| (p.key(), p)).collect();

    let mut diff = Difference::new(calendar::CONFIRMATIONS);

    for old in old_list {
        match new_by_email.get(&old.key()) {
            Some(new) => {
                if let Some(change) = ConfirmationChange::detect(
                    old.key(),
                    old.confirm,
                    new.confirm,
                    old.confirm_message.as_deref(),
                    new.confirm_message.as_deref(),
                ) {
                    diff.changed.push(change);
                }
            }
            None => diff.removed.push(old.clone()),
        }
    }

    for new in new_list {
        if !old_by_email.contains_key(&new.key()) {
            diff.added.push(new.clone());
        }
    }

    diff.into_option()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::appointment::Appointment;
    use crate::object::participant::ConfirmStatus;

    #[test]
    fn test_status_move_for_matched_email() {
        let mut original = Appointment::new();
        original.set_confirmations(vec![ConfirmableParticipant::new(
            "a@x.com",
            ConfirmStatus::Tentative,
        )]);
        let mut update = Appointment::new();
        update.set_confirmations(vec![ConfirmableParticipant::new(
            "a@x.com",
            ConfirmStatus::Accepted,
        )]);

        let diff = difference(&original, &update).unwrap();
        assert!(diff.added.is_empty());
        assert!(diff.removed.is_empty());
        assert_eq!(diff.changed.len(), 1);
        assert_eq!(diff.changed[0].old_status, ConfirmStatus::Tentative);
        assert_eq!(diff.changed[0].new_status, ConfirmStatus::Accepted);
        assert_eq!(
            diff.changed[0].participant,
            ParticipantKey::from_email("a@x.com")
        );
    }

    #[test]
    fn test_email_key_ignores_case() {
        let mut original = Appointment::new();
        original.set_confirmations(vec![ConfirmableParticipant::new(
            "Guest@X.com",
            ConfirmStatus::Accepted,
        )]);
        let mut update = Appointment::new();
        update.set_confirmations(vec![ConfirmableParticipant::new(
            "guest@x.com",
            ConfirmStatus::Accepted,
        )]);

        assert!(difference(&original, &update).is_none());
    }

    #[test]
    fn test_new_email_is_added_old_email_removed() {
        let mut original = Appointment::new();
        original.set_confirmations(vec![ConfirmableParticipant::new(
            "old@x.com",
            ConfirmStatus::Accepted,
        )]);
        let mut update = Appointment::new();
        update.set_confirmations(vec![ConfirmableParticipant::new(
            "new@x.com",
            ConfirmStatus::None,
        )]);

        let diff = difference(&original, &update).unwrap();
        assert_eq!(diff.added[0].email_address, "new@x.com");
        assert_eq!(diff.removed[0].email_address, "old@x.com");
        assert!(diff.changed.is_empty());
    }

    #[test]
    fn test_untouched_update_yields_none() {
        let mut original = Appointment::new();
        original.set_confirmations(vec![ConfirmableParticipant::new(
            "a@x.com",
            ConfirmStatus::Accepted,
        )]);
        let update = Appointment::new();

        assert!(difference(&original, &update).is_none());
    }
}
