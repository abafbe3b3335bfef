//! Typed accessors for calendar items.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::columns::calendar;
use crate::fields::{own_contains, own_set, own_value};
use crate::object::levels::CommonFields;
use crate::object::participant::{ConfirmableParticipant, Participant, UserParticipant};
use crate::value::FieldValue;

/// How a calendar item recurs. Stored as the wire value of the
/// recurrence-type column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurrenceType {
    Never = 0,
    Daily = 1,
    Weekly = 2,
    Monthly = 3,
    Yearly = 4,
}

impl RecurrenceType {
    pub fn from_i32(value: i32) -> Option<RecurrenceType> {
        match value {
            0 => Some(RecurrenceType::Never),
            1 => Some(RecurrenceType::Daily),
            2 => Some(RecurrenceType::Weekly),
            3 => Some(RecurrenceType::Monthly),
            4 => Some(RecurrenceType::Yearly),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> i32 {
        *self as i32
    }
}

/// Fields shared by all scheduled items: the core scheduling data,
/// recurrence settings, and the participant collections the differs
/// operate on.
pub trait CalendarFields: CommonFields {
    fn title(&self) -> Option<&str> {
        own_value(self, calendar::TITLE).and_then(FieldValue::as_text)
    }

    fn set_title(&mut self, title: &str) {
        own_set(self, calendar::TITLE, title.into());
    }

    fn note(&self) -> Option<&str> {
        own_value(self, calendar::NOTE).and_then(FieldValue::as_text)
    }

    fn set_note(&mut self, note: &str) {
        own_set(self, calendar::NOTE, note.into());
    }

    fn organizer(&self) -> Option<&str> {
        own_value(self, calendar::ORGANIZER).and_then(FieldValue::as_text)
    }

    fn set_organizer(&mut self, organizer: &str) {
        own_set(self, calendar::ORGANIZER, organizer.into());
    }

    fn start_date(&self) -> Option<DateTime<Utc>> {
        own_value(self, calendar::START_DATE).and_then(FieldValue::as_timestamp)
    }

    fn set_start_date(&mut self, start: DateTime<Utc>) {
        own_set(self, calendar::START_DATE, start.into());
    }

    fn end_date(&self) -> Option<DateTime<Utc>> {
        own_value(self, calendar::END_DATE).and_then(FieldValue::as_timestamp)
    }

    fn set_end_date(&mut self, end: DateTime<Utc>) {
        own_set(self, calendar::END_DATE, end.into());
    }

    fn recurrence_type(&self) -> Option<RecurrenceType> {
        own_value(self, calendar::RECURRENCE_TYPE)
            .and_then(FieldValue::as_int)
            .and_then(RecurrenceType::from_i32)
    }

    fn set_recurrence_type(&mut self, kind: RecurrenceType) {
        own_set(self, calendar::RECURRENCE_TYPE, kind.as_i32().into());
    }

    fn interval(&self) -> Option<i32> {
        own_value(self, calendar::INTERVAL).and_then(FieldValue::as_int)
    }

    fn set_interval(&mut self, interval: i32) {
        own_set(self, calendar::INTERVAL, interval.into());
    }

    /// Number of occurrences of the series. Reads through to the occurrence
    /// column when never set directly (schema-level fallback).
    fn recurrence_count(&self) -> Option<i32> {
        own_value(self, calendar::RECURRENCE_COUNT).and_then(FieldValue::as_int)
    }

    fn set_recurrence_count(&mut self, count: i32) {
        own_set(self, calendar::RECURRENCE_COUNT, count.into());
    }

    fn occurrence(&self) -> Option<i32> {
        own_value(self, calendar::OCCURRENCE).and_then(FieldValue::as_int)
    }

    fn set_occurrence(&mut self, occurrence: i32) {
        own_set(self, calendar::OCCURRENCE, occurrence.into());
    }

    fn until(&self) -> Option<NaiveDate> {
        own_value(self, calendar::UNTIL).and_then(FieldValue::as_date)
    }

    fn set_until(&mut self, until: NaiveDate) {
        own_set(self, calendar::UNTIL, until.into());
    }

    /// Series anchor. The stored value is day-aligned by the schema, no
    /// matter which time of day is passed in.
    fn recurrence_start(&self) -> Option<DateTime<Utc>> {
        own_value(self, calendar::RECURRENCE_START).and_then(FieldValue::as_timestamp)
    }

    fn set_recurrence_start(&mut self, start: DateTime<Utc>) {
        own_set(self, calendar::RECURRENCE_START, start.into());
    }

    fn participants(&self) -> Option<&[Participant]> {
        own_value(self, calendar::PARTICIPANTS).and_then(FieldValue::as_participants)
    }

    fn set_participants(&mut self, participants: impl Into<Vec<Participant>>) {
        own_set(self, calendar::PARTICIPANTS, participants.into().into());
    }

    fn has_participants(&self) -> bool {
        own_contains(self, calendar::PARTICIPANTS)
    }

    fn users(&self) -> Option<&[UserParticipant]> {
        own_value(self, calendar::USERS).and_then(FieldValue::as_users)
    }

    fn set_users(&mut self, users: impl Into<Vec<UserParticipant>>) {
        own_set(self, calendar::USERS, users.into().into());
    }

    fn has_users(&self) -> bool {
        own_contains(self, calendar::USERS)
    }

    fn confirmations(&self) -> Option<&[ConfirmableParticipant]> {
        own_value(self, calendar::CONFIRMATIONS).and_then(FieldValue::as_confirmations)
    }

    fn set_confirmations(&mut self, confirmations: impl Into<Vec<ConfirmableParticipant>>) {
        own_set(self, calendar::CONFIRMATIONS, confirmations.into().into());
    }

    fn has_confirmations(&self) -> bool {
        own_contains(self, calendar::CONFIRMATIONS)
    }

    fn change_exceptions(&self) -> Option<&[NaiveDate]> {
        own_value(self, calendar::CHANGE_EXCEPTIONS).and_then(FieldValue::as_dates)
    }

    fn set_change_exceptions(&mut self, dates: impl Into<Vec<NaiveDate>>) {
        own_set(self, calendar::CHANGE_EXCEPTIONS, dates.into().into());
    }

    fn has_change_exceptions(&self) -> bool {
        own_contains(self, calendar::CHANGE_EXCEPTIONS)
    }

    fn delete_exceptions(&self) -> Option<&[NaiveDate]> {
        own_value(self, calendar::DELETE_EXCEPTIONS).and_then(FieldValue::as_dates)
    }

    fn set_delete_exceptions(&mut self, dates: impl Into<Vec<NaiveDate>>) {
        own_set(self, calendar::DELETE_EXCEPTIONS, dates.into().into());
    }

    fn has_delete_exceptions(&self) -> bool {
        own_contains(self, calendar::DELETE_EXCEPTIONS)
    }
}
