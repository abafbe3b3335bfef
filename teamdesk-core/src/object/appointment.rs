//! Appointments.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::columns::{ColumnId, appointment};
use crate::compare;
use crate::error::TeamdeskResult;
use crate::fields::{FieldAccess, FieldSet, own_set, own_value};
use crate::object::calendar::CalendarFields;
use crate::object::levels::{CommonFields, FolderChildFields, ObjectFields};
use crate::object::{deserialize_fields, serialize_fields};
use crate::schema::{self, Schema};
use crate::value::FieldValue;

/// Free/busy display of an appointment. Stored as the wire value of the
/// shown-as column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShownAs {
    Reserved = 1,
    Temporary = 2,
    Absent = 3,
    Free = 4,
}

impl ShownAs {
    pub fn from_i32(value: i32) -> Option<ShownAs> {
        match value {
            1 => Some(ShownAs::Reserved),
            2 => Some(ShownAs::Temporary),
            3 => Some(ShownAs::Absent),
            4 => Some(ShownAs::Free),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> i32 {
        *self as i32
    }
}

/// A calendar appointment. Constructed empty; every field is explicitly set.
#[derive(Debug, Clone)]
pub struct Appointment {
    fields: FieldSet,
}

impl Appointment {
    pub fn new() -> Appointment {
        Appointment {
            fields: FieldSet::new(&schema::APPOINTMENT),
        }
    }

    pub fn location(&self) -> Option<&str> {
        own_value(self, appointment::LOCATION).and_then(FieldValue::as_text)
    }

    pub fn set_location(&mut self, location: &str) {
        own_set(self, appointment::LOCATION, location.into());
    }

    /// Whether the appointment covers whole days instead of a time range.
    pub fn full_time(&self) -> bool {
        own_value(self, appointment::FULL_TIME)
            .and_then(FieldValue::as_bool)
            .unwrap_or(false)
    }

    pub fn set_full_time(&mut self, full_time: bool) {
        own_set(self, appointment::FULL_TIME, full_time.into());
    }

    pub fn shown_as(&self) -> Option<ShownAs> {
        own_value(self, appointment::SHOWN_AS)
            .and_then(FieldValue::as_int)
            .and_then(ShownAs::from_i32)
    }

    pub fn set_shown_as(&mut self, shown_as: ShownAs) {
        own_set(self, appointment::SHOWN_AS, shown_as.as_i32().into());
    }

    /// Olson name of the timezone the appointment was created in.
    pub fn timezone(&self) -> Option<&str> {
        own_value(self, appointment::TIMEZONE).and_then(FieldValue::as_text)
    }

    pub fn set_timezone(&mut self, timezone: &str) {
        own_set(self, appointment::TIMEZONE, timezone.into());
    }

    /// Equality ignoring object-level housekeeping columns.
    pub fn content_equals(&self, other: &Appointment) -> bool {
        compare::content_equals(self, other)
    }
}

impl Default for Appointment {
    fn default() -> Appointment {
        Appointment::new()
    }
}

impl FieldAccess for Appointment {
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

impl ObjectFields for Appointment {}
impl FolderChildFields for Appointment {}
impl CommonFields for Appointment {}
impl CalendarFields for Appointment {}

impl PartialEq for Appointment {
    fn eq(&self, other: &Appointment) -> bool {
        compare::identity_equals(self, other)
    }
}

impl Eq for Appointment {}

impl Hash for Appointment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        compare::fold_fields(self, state);
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title().unwrap_or("(untitled)"))
    }
}

impl Serialize for Appointment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_fields(&self.fields, serializer)
    }
}

impl<'de> Deserialize<'de> for Appointment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Appointment, D::Error> {
        Ok(Appointment {
            fields: deserialize_fields(&schema::APPOINTMENT, deserializer)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::calendar;
    use crate::object::participant::Participant;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_new_appointment_is_empty() {
        let a = Appointment::new();
        assert!(!a.has_participants());
        assert!(a.title().is_none());
        assert!(a.object_id().is_none());
    }

    #[test]
    fn test_typed_accessors_roundtrip() {
        let mut a = Appointment::new();
        a.set_title("Review");
        a.set_location("Room 4");
        a.set_full_time(true);
        a.set_shown_as(ShownAs::Free);

        assert_eq!(a.title(), Some("Review"));
        assert_eq!(a.location(), Some("Room 4"));
        assert!(a.full_time());
        assert_eq!(a.shown_as(), Some(ShownAs::Free));
    }

    #[test]
    fn test_recurrence_start_is_day_aligned() {
        let mut a = Appointment::new();
        a.set_recurrence_start(Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap());
        assert_eq!(
            a.recurrence_start(),
            Some(Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_set_participants_accepts_slice_and_vec() {
        let list = vec![Participant::user(1), Participant::user(2)];

        let mut from_vec = Appointment::new();
        from_vec.set_participants(list.clone());

        let mut from_slice = Appointment::new();
        from_slice.set_participants(list.as_slice());

        assert_eq!(from_vec.participants(), from_slice.participants());
    }

    #[test]
    fn test_assign_uid_is_stable() {
        let mut a = Appointment::new();
        let uid = a.assign_uid();
        assert_eq!(a.assign_uid(), uid);
        assert_eq!(a.uid(), Some(uid.as_str()));
    }

    #[test]
    fn test_serde_roundtrip_preserves_fields() {
        let mut a = Appointment::new();
        a.set_title("Review");
        a.set_users([crate::object::participant::UserParticipant::new(5)].to_vec());
        a.set_start_date(Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap());

        let json = serde_json::to_string(&a).unwrap();
        let back: Appointment = serde_json::from_str(&json).unwrap();

        assert_eq!(a, back);
        assert!(back.has_users());
    }

    #[test]
    fn test_deserialize_rejects_wrong_kind() {
        // title column declared as text, handed a bool
        let json = format!("{{\"{}\": {{\"Bool\": true}} }}", calendar::TITLE);
        assert!(serde_json::from_str::<Appointment>(&json).is_err());
    }
}
