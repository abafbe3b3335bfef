//! Contacts.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::columns::ColumnId;
use crate::columns::contact;
use crate::compare;
use crate::error::TeamdeskResult;
use crate::fields::{FieldAccess, FieldSet, own_set, own_value};
use crate::object::levels::{CommonFields, FolderChildFields, ObjectFields};
use crate::object::{deserialize_fields, serialize_fields};
use crate::schema::{self, Schema};
use crate::value::FieldValue;

/// An address-book contact.
#[derive(Debug, Clone)]
pub struct Contact {
    fields: FieldSet,
}

impl Contact {
    pub fn new() -> Contact {
        Contact {
            fields: FieldSet::new(&schema::CONTACT),
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        own_value(self, contact::DISPLAY_NAME).and_then(FieldValue::as_text)
    }

    pub fn set_display_name(&mut self, name: &str) {
        own_set(self, contact::DISPLAY_NAME, name.into());
    }

    pub fn given_name(&self) -> Option<&str> {
        own_value(self, contact::GIVEN_NAME).and_then(FieldValue::as_text)
    }

    pub fn set_given_name(&mut self, name: &str) {
        own_set(self, contact::GIVEN_NAME, name.into());
    }

    pub fn sur_name(&self) -> Option<&str> {
        own_value(self, contact::SUR_NAME).and_then(FieldValue::as_text)
    }

    pub fn set_sur_name(&mut self, name: &str) {
        own_set(self, contact::SUR_NAME, name.into());
    }

    pub fn email1(&self) -> Option<&str> {
        own_value(self, contact::EMAIL1).and_then(FieldValue::as_text)
    }

    pub fn set_email1(&mut self, email: &str) {
        own_set(self, contact::EMAIL1, email.into());
    }

    pub fn email2(&self) -> Option<&str> {
        own_value(self, contact::EMAIL2).and_then(FieldValue::as_text)
    }

    pub fn set_email2(&mut self, email: &str) {
        own_set(self, contact::EMAIL2, email.into());
    }

    pub fn cellular_phone1(&self) -> Option<&str> {
        own_value(self, contact::CELLULAR_PHONE1).and_then(FieldValue::as_text)
    }

    pub fn set_cellular_phone1(&mut self, phone: &str) {
        own_set(self, contact::CELLULAR_PHONE1, phone.into());
    }

    pub fn company(&self) -> Option<&str> {
        own_value(self, contact::COMPANY).and_then(FieldValue::as_text)
    }

    pub fn set_company(&mut self, company: &str) {
        own_set(self, contact::COMPANY, company.into());
    }

    pub fn position(&self) -> Option<&str> {
        own_value(self, contact::POSITION).and_then(FieldValue::as_text)
    }

    pub fn set_position(&mut self, position: &str) {
        own_set(self, contact::POSITION, position.into());
    }

    pub fn birthday(&self) -> Option<NaiveDate> {
        own_value(self, contact::BIRTHDAY).and_then(FieldValue::as_date)
    }

    pub fn set_birthday(&mut self, birthday: NaiveDate) {
        own_set(self, contact::BIRTHDAY, birthday.into());
    }

    /// Equality ignoring object-level housekeeping columns.
    pub fn content_equals(&self, other: &Contact) -> bool {
        compare::content_equals(self, other)
    }
}

impl Default for Contact {
    fn default() -> Contact {
        Contact::new()
    }
}

impl FieldAccess for Contact {
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

impl ObjectFields for Contact {}
impl FolderChildFields for Contact {}
impl CommonFields for Contact {}

impl PartialEq for Contact {
    fn eq(&self, other: &Contact) -> bool {
        compare::identity_equals(self, other)
    }
}

impl Eq for Contact {}

impl Hash for Contact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        compare::fold_fields(self, state);
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name().unwrap_or("(unnamed)"))
    }
}

impl Serialize for Contact {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_fields(&self.fields, serializer)
    }
}

impl<'de> Deserialize<'de> for Contact {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Contact, D::Error> {
        Ok(Contact {
            fields: deserialize_fields(&schema::CONTACT, deserializer)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TeamdeskError;

    #[test]
    fn test_contact_does_not_recognize_calendar_columns() {
        let contact = Contact::new();
        let result = contact.get(crate::columns::calendar::TITLE);
        assert!(matches!(
            result,
            Err(TeamdeskError::UnknownColumn { entity: "contact", .. })
        ));
    }

    #[test]
    fn test_contact_accessors_roundtrip() {
        let mut c = Contact::new();
        c.set_display_name("Erin Example");
        c.set_email1("erin@example.com");
        c.set_birthday(NaiveDate::from_ymd_opt(1990, 6, 1).unwrap());

        assert_eq!(c.display_name(), Some("Erin Example"));
        assert_eq!(c.email1(), Some("erin@example.com"));
        assert_eq!(c.birthday(), NaiveDate::from_ymd_opt(1990, 6, 1));
    }

    #[test]
    fn test_common_level_reachable_from_contact() {
        let mut c = Contact::new();
        c.set_private_flag(true);
        c.set_folder_id(31);
        assert!(c.private_flag());
        assert_eq!(c.folder_id(), Some(31));
    }
}
