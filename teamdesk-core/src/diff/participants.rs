//! Differ for the participant list.

use std::collections::HashMap;

use crate::columns::calendar;
use crate::diff::Difference;
use crate::object::calendar::CalendarFields;
use crate::object::participant::{Participant, ParticipantKey};

/// Compare the participant lists of two snapshots. Participants pair up by
/// numeric id, falling back to case-insensitive email; entries with neither
/// identity pair by full value equality.
pub(crate) fn difference<T: CalendarFields>(
    original: &T,
    update: &T,
) -> Option<Difference<Participant>> {
    if !update.has_participants() {
        return None;
    }

    let old_list = original.participants().unwrap_or_default();
    let new_list = update.participants().unwrap_or_default();

    let old_by_key: HashMap<ParticipantKey, &Participant> = old_list
        .iter()
        .filter_map(|p| p.key().map(|key| (key, p)))
        .collect();
    let new_by_key: HashMap<ParticipantKey, &Participant> = new_list
        .iter()
        .filter_map(|p| p.key().map(|key| (key, p)))
        .collect();

    let mut diff = Difference::new(calendar::PARTICIPANTS);

    for old in old_list {
        let matched = match old.key() {
            Some(key) => new_by_key.contains_key(&key),
            None => new_list.contains(old),
        };
        if !matched {
            diff.removed.push(old.clone());
        }
    }

    for new in new_list {
        let matched = match new.key() {
            Some(key) => old_by_key.contains_key(&key),
            None => old_list.contains(new),
        };
        if !matched {
            diff.added.push(new.clone());
        }
    }

    diff.into_option()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::appointment::Appointment;
    use crate::object::participant::{NO_ID, ParticipantKind};

    #[test]
    fn test_no_difference_when_update_never_touched_participants() {
        let mut original = Appointment::new();
        original.set_participants(vec![Participant::user(1)]);
        let update = Appointment::new();

        assert!(difference(&original, &update).is_none());
    }

    #[test]
    fn test_all_added_when_original_has_no_participants() {
        let original = Appointment::new();
        let mut update = Appointment::new();
        update.set_participants(vec![Participant::user(1), Participant::user(2)]);

        let diff = difference(&original, &update).unwrap();
        assert_eq!(diff.added.len(), 2);
        assert!(diff.removed.is_empty());
        assert!(diff.changed.is_empty());
    }

    #[test]
    fn test_matching_by_email_is_case_insensitive() {
        let mut original = Appointment::new();
        original.set_participants(vec![Participant::external("Guest@Example.com")]);
        let mut update = Appointment::new();
        update.set_participants(vec![Participant::external("guest@example.com")]);

        assert!(difference(&original, &update).is_none());
    }

    #[test]
    fn test_id_match_beats_differing_email() {
        let mut with_email = Participant::user(4);
        with_email.email_address = Some("old@example.com".to_string());
        let mut renamed = Participant::user(4);
        renamed.email_address = Some("new@example.com".to_string());

        let mut original = Appointment::new();
        original.set_participants(vec![with_email]);
        let mut update = Appointment::new();
        update.set_participants(vec![renamed]);

        // Same numeric identity: neither added nor removed
        assert!(difference(&original, &update).is_none());
    }

    #[test]
    fn test_added_and_removed_follow_input_order() {
        let mut original = Appointment::new();
        original.set_participants(vec![Participant::user(1), Participant::user(2)]);
        let mut update = Appointment::new();
        update.set_participants(vec![
            Participant::user(2),
            Participant::external("a@x.com"),
            Participant::external("b@x.com"),
        ]);

        let diff = difference(&original, &update).unwrap();
        assert_eq!(diff.removed, vec![Participant::user(1)]);
        assert_eq!(
            diff.added,
            vec![
                Participant::external("a@x.com"),
                Participant::external("b@x.com")
            ]
        );
    }

    #[test]
    fn test_keyless_participants_match_by_value() {
        let room = Participant {
            id: NO_ID,
            kind: ParticipantKind::Resource,
            email_address: None,
            display_name: Some("Room 2".to_string()),
        };
        let mut original = Appointment::new();
        original.set_participants(vec![room.clone()]);
        let mut update = Appointment::new();
        update.set_participants(vec![room]);

        assert!(difference(&original, &update).is_none());
    }

    #[test]
    fn test_diff_against_self_is_none() {
        let mut a = Appointment::new();
        a.set_participants(vec![Participant::user(1)]);
        assert!(difference(&a, &a).is_none());
    }
}
