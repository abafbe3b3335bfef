//! Differs for the recurrence exception date lists.
//!
//! Exception dates either match or they don't; there is no changed bucket.

use chrono::NaiveDate;

use crate::columns::{ColumnId, calendar};
use crate::diff::Difference;
use crate::object::calendar::CalendarFields;

/// Differ for dates whose occurrence was rescheduled or edited.
pub(crate) fn change_difference<T: CalendarFields>(
    original: &T,
    update: &T,
) -> Option<Difference<NaiveDate>> {
    if !update.has_change_exceptions() {
        return None;
    }
    date_difference(
        calendar::CHANGE_EXCEPTIONS,
        original.change_exceptions().unwrap_or_default(),
        update.change_exceptions().unwrap_or_default(),
    )
}

/// Differ for dates whose occurrence was dropped from the series.
pub(crate) fn delete_difference<T: CalendarFields>(
    original: &T,
    update: &T,
) -> Option<Difference<NaiveDate>> {
    if !update.has_delete_exceptions() {
        return None;
    }
    date_difference(
        calendar::DELETE_EXCEPTIONS,
        original.delete_exceptions().unwrap_or_default(),
        update.delete_exceptions().unwrap_or_default(),
    )
}

fn date_difference(
    column: ColumnId,
    old_list: &[NaiveDate],
    new_list: &[NaiveDate],
) -> Option<Difference<NaiveDate>> {
    let mut diff = Difference::new(column);

    for old in old_list {
        if !new_list.contains(old) {
            diff.removed.push(*old);
        }
    }
    for new in new_list {
        if !old_list.contains(new) {
            diff.added.push(*new);
        }
    }

    diff.into_option()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::appointment::Appointment;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_dates_match_or_move_between_buckets() {
        let mut original = Appointment::new();
        original.set_change_exceptions(vec![day(1), day(8)]);
        let mut update = Appointment::new();
        update.set_change_exceptions(vec![day(8), day(15)]);

        let diff = change_difference(&original, &update).unwrap();
        assert_eq!(diff.removed, vec![day(1)]);
        assert_eq!(diff.added, vec![day(15)]);
        assert!(diff.changed.is_empty());
    }

    #[test]
    fn test_exception_lists_diff_independently() {
        let mut original = Appointment::new();
        original.set_delete_exceptions(vec![day(1)]);
        let mut update = Appointment::new();
        update.set_change_exceptions(vec![day(1)]);

        // Delete exceptions were never touched by the update
        assert!(delete_difference(&original, &update).is_none());
        let change = change_difference(&original, &update).unwrap();
        assert_eq!(change.added, vec![day(1)]);
    }

    #[test]
    fn test_explicitly_cleared_update_removes_all_dates() {
        let mut original = Appointment::new();
        original.set_delete_exceptions(vec![day(1), day(2)]);
        let mut update = Appointment::new();
        update.set_delete_exceptions(Vec::new());

        let diff = delete_difference(&original, &update).unwrap();
        assert_eq!(diff.removed, vec![day(1), day(2)]);
        assert!(diff.added.is_empty());
    }

    #[test]
    fn test_equal_lists_yield_none() {
        let mut original = Appointment::new();
        original.set_change_exceptions(vec![day(1)]);
        let mut update = Appointment::new();
        update.set_change_exceptions(vec![day(1)]);

        assert!(change_difference(&original, &update).is_none());
    }
}
