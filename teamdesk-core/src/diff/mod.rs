//! Change detection between two snapshots of a calendar item.
//!
//! One differ per collection-valued column. Each differ compares an
//! "original" and an "update" snapshot of the same entity type and reports
//! `None` when the column never changed — most importantly when the update
//! never touched the column at all, so partial updates cannot fake changes.

mod change;
mod confirmations;
mod difference;
mod exceptions;
mod participants;
mod users;

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use change::ConfirmationChange;
pub use difference::Difference;

use crate::columns::ColumnId;
use crate::object::calendar::CalendarFields;
use crate::object::participant::{ConfirmableParticipant, Participant, UserParticipant};

/// A difference on one column, tagged by which differ produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldDifference {
    Participants(Difference<Participant>),
    Users(Difference<UserParticipant, ConfirmationChange>),
    Confirmations(Difference<ConfirmableParticipant, ConfirmationChange>),
    ChangeExceptions(Difference<NaiveDate>),
    DeleteExceptions(Difference<NaiveDate>),
}

impl FieldDifference {
    /// Column the difference belongs to.
    pub fn column(&self) -> ColumnId {
        match self {
            FieldDifference::Participants(d) => d.column,
            FieldDifference::Users(d) => d.column,
            FieldDifference::Confirmations(d) => d.column,
            FieldDifference::ChangeExceptions(d) => d.column,
            FieldDifference::DeleteExceptions(d) => d.column,
        }
    }

    fn counts(&self) -> (usize, usize, usize) {
        match self {
            FieldDifference::Participants(d) => (d.added.len(), d.removed.len(), d.changed.len()),
            FieldDifference::Users(d) => (d.added.len(), d.removed.len(), d.changed.len()),
            FieldDifference::Confirmations(d) => (d.added.len(), d.removed.len(), d.changed.len()),
            FieldDifference::ChangeExceptions(d) => {
                (d.added.len(), d.removed.len(), d.changed.len())
            }
            FieldDifference::DeleteExceptions(d) => {
                (d.added.len(), d.removed.len(), d.changed.len())
            }
        }
    }
}

impl fmt::Display for FieldDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (added, removed, changed) = self.counts();
        write!(
            f,
            "column {}: {added} added, {removed} removed, {changed} changed",
            self.column()
        )
    }
}

/// Run every differ in fixed order and collect the non-empty results.
pub fn differences<T: CalendarFields>(original: &T, update: &T) -> Vec<FieldDifference> {
    let mut out = Vec::new();

    if let Some(d) = participants::difference(original, update) {
        out.push(FieldDifference::Participants(d));
    }
    if let Some(d) = users::difference(original, update) {
        out.push(FieldDifference::Users(d));
    }
    if let Some(d) = confirmations::difference(original, update) {
        out.push(FieldDifference::Confirmations(d));
    }
    if let Some(d) = exceptions::change_difference(original, update) {
        out.push(FieldDifference::ChangeExceptions(d));
    }
    if let Some(d) = exceptions::delete_difference(original, update) {
        out.push(FieldDifference::DeleteExceptions(d));
    }

    for difference in &out {
        let (added, removed, changed) = difference.counts();
        debug!(
            column = difference.column(),
            added, removed, changed, "detected difference"
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::calendar;
    use crate::object::appointment::Appointment;
    use crate::object::participant::ConfirmStatus;

    #[test]
    fn test_diffing_an_entity_against_itself_finds_nothing() {
        let mut a = Appointment::new();
        a.set_participants(vec![Participant::user(1)]);
        a.set_users(vec![UserParticipant::new(1)]);
        a.set_confirmations(vec![ConfirmableParticipant::new(
            "a@x.com",
            ConfirmStatus::Accepted,
        )]);
        a.set_change_exceptions(vec![NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()]);
        a.set_delete_exceptions(vec![NaiveDate::from_ymd_opt(2024, 3, 8).unwrap()]);

        assert!(differences(&a, &a).is_empty());
    }

    #[test]
    fn test_results_are_tagged_by_column_in_fixed_order() {
        let mut original = Appointment::new();
        original.set_users(vec![UserParticipant::new(1)]);

        let mut update = Appointment::new();
        update.set_participants(vec![Participant::user(9)]);
        update.set_users(Vec::new());

        let diffs = differences(&original, &update);
        let columns: Vec<_> = diffs.iter().map(FieldDifference::column).collect();
        assert_eq!(columns, vec![calendar::PARTICIPANTS, calendar::USERS]);
    }

    #[test]
    fn test_empty_entities_produce_no_differences() {
        assert!(differences(&Appointment::new(), &Appointment::new()).is_empty());
    }
}
