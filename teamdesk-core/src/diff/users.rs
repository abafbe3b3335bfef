//! Differ for internal users and their confirmation state.

use std::collections::HashMap;

use crate::columns::calendar;
use crate::diff::{ConfirmationChange, Difference};
use crate::object::calendar::CalendarFields;
use crate::object::participant::{ParticipantKey, UserParticipant};

/// Compare the user lists of two snapshots. Users pair up by their numeric
/// id; matched pairs are checked for confirmation status and message moves.
pub(crate) fn difference<T: CalendarFields>(
    original: &T,
    update: &T,
) -> Option<Difference<UserParticipant, ConfirmationChange>> {
    if !update.has_users() {
        return None;
    }

    let old_list = original.users().unwrap_or_default();
    let new_list = update.users().unwrap_or_default();

    let old_by_id: HashMap<i32, &UserParticipant> =
        old_list.iter().map(|u| (u.id, u)).collect();
    let new_by_id: HashMap<i32, &UserParticipant> =
        new_list.iter().map(|u| (u.id, u)).collect();

    let mut diff = Difference::new(calendar::USERS);

    for old in old_list {
        match new_by_id.get(&old.id) {
            Some(new) => {
                if let Some(change) = ConfirmationChange::detect(
                    ParticipantKey::Id(old.id),
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
        if !old_by_id.contains_key(&new.id) {
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
    fn test_explicit_empty_update_removes_everyone() {
        let mut original = Appointment::new();
        original.set_users(vec![UserParticipant::new(1)]);
        let mut update = Appointment::new();
        update.set_users(Vec::new());

        let diff = difference(&original, &update).unwrap();
        assert_eq!(diff.removed, vec![UserParticipant::new(1)]);
        assert!(diff.added.is_empty());
        assert!(diff.changed.is_empty());
    }

    #[test]
    fn test_confirmation_move_is_reported_as_change() {
        let mut original = Appointment::new();
        original.set_users(vec![UserParticipant::with_confirm(
            7,
            ConfirmStatus::Tentative,
        )]);
        let mut update = Appointment::new();
        update.set_users(vec![UserParticipant::with_confirm(
            7,
            ConfirmStatus::Accepted,
        )]);

        let diff = difference(&original, &update).unwrap();
        assert!(diff.added.is_empty());
        assert!(diff.removed.is_empty());
        assert_eq!(diff.changed.len(), 1);

        let change = &diff.changed[0];
        assert_eq!(change.participant, ParticipantKey::Id(7));
        assert_eq!(change.old_status, ConfirmStatus::Tentative);
        assert_eq!(change.new_status, ConfirmStatus::Accepted);
    }

    #[test]
    fn test_message_move_alone_is_a_change() {
        let mut confirmed = UserParticipant::with_confirm(7, ConfirmStatus::Accepted);
        let mut original = Appointment::new();
        original.set_users(vec![confirmed.clone()]);

        confirmed.confirm_message = Some("joining remotely".to_string());
        let mut update = Appointment::new();
        update.set_users(vec![confirmed]);

        let diff = difference(&original, &update).unwrap();
        assert_eq!(diff.changed.len(), 1);
        assert_eq!(
            diff.changed[0].new_message.as_deref(),
            Some("joining remotely")
        );
    }

    #[test]
    fn test_unchanged_users_yield_no_difference() {
        let users = vec![
            UserParticipant::with_confirm(1, ConfirmStatus::Accepted),
            UserParticipant::new(2),
        ];
        let mut original = Appointment::new();
        original.set_users(users.clone());
        let mut update = Appointment::new();
        update.set_users(users);

        assert!(difference(&original, &update).is_none());
    }
}
