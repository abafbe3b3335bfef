//! Typed accessors for the shared ownership levels.
//!
//! Each level is an extension trait over [`FieldAccess`] whose default
//! methods go through the schema-checked field store. Concrete entity types
//! opt in to the levels their schema chain covers; no state is inherited.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::columns::{common, folder_child, object};
use crate::fields::{FieldAccess, own_contains, own_set, own_value};
use crate::value::FieldValue;

/// Identity and modification bookkeeping carried by every persisted object.
pub trait ObjectFields: FieldAccess {
    fn object_id(&self) -> Option<i32> {
        own_value(self, object::OBJECT_ID).and_then(FieldValue::as_int)
    }

    fn set_object_id(&mut self, id: i32) {
        own_set(self, object::OBJECT_ID, id.into());
    }

    fn created_by(&self) -> Option<i32> {
        own_value(self, object::CREATED_BY).and_then(FieldValue::as_int)
    }

    fn set_created_by(&mut self, user: i32) {
        own_set(self, object::CREATED_BY, user.into());
    }

    fn modified_by(&self) -> Option<i32> {
        own_value(self, object::MODIFIED_BY).and_then(FieldValue::as_int)
    }

    fn set_modified_by(&mut self, user: i32) {
        own_set(self, object::MODIFIED_BY, user.into());
    }

    fn creation_date(&self) -> Option<DateTime<Utc>> {
        own_value(self, object::CREATION_DATE).and_then(FieldValue::as_timestamp)
    }

    fn set_creation_date(&mut self, ts: DateTime<Utc>) {
        own_set(self, object::CREATION_DATE, ts.into());
    }

    fn last_modified(&self) -> Option<DateTime<Utc>> {
        own_value(self, object::LAST_MODIFIED).and_then(FieldValue::as_timestamp)
    }

    fn set_last_modified(&mut self, ts: DateTime<Utc>) {
        own_set(self, object::LAST_MODIFIED, ts.into());
    }
}

/// Objects that live inside a folder.
pub trait FolderChildFields: ObjectFields {
    fn folder_id(&self) -> Option<i32> {
        own_value(self, folder_child::FOLDER_ID).and_then(FieldValue::as_int)
    }

    fn set_folder_id(&mut self, folder: i32) {
        own_set(self, folder_child::FOLDER_ID, folder.into());
    }

    fn has_folder_id(&self) -> bool {
        own_contains(self, folder_child::FOLDER_ID)
    }
}

/// Fields shared by all user-visible groupware items.
pub trait CommonFields: FolderChildFields {
    fn categories(&self) -> Option<&str> {
        own_value(self, common::CATEGORIES).and_then(FieldValue::as_text)
    }

    fn set_categories(&mut self, categories: &str) {
        own_set(self, common::CATEGORIES, categories.into());
    }

    fn private_flag(&self) -> bool {
        own_value(self, common::PRIVATE_FLAG)
            .and_then(FieldValue::as_bool)
            .unwrap_or(false)
    }

    fn set_private_flag(&mut self, private: bool) {
        own_set(self, common::PRIVATE_FLAG, private.into());
    }

    fn color_label(&self) -> Option<i32> {
        own_value(self, common::COLOR_LABEL).and_then(FieldValue::as_int)
    }

    fn set_color_label(&mut self, label: i32) {
        own_set(self, common::COLOR_LABEL, label.into());
    }

    fn number_of_attachments(&self) -> Option<i32> {
        own_value(self, common::NUMBER_OF_ATTACHMENTS).and_then(FieldValue::as_int)
    }

    fn set_number_of_attachments(&mut self, count: i32) {
        own_set(self, common::NUMBER_OF_ATTACHMENTS, count.into());
    }

    fn uid(&self) -> Option<&str> {
        own_value(self, common::UID).and_then(FieldValue::as_text)
    }

    fn set_uid(&mut self, uid: &str) {
        own_set(self, common::UID, uid.into());
    }

    /// Assign a fresh UID unless one is already present. Returns the UID the
    /// object ends up with.
    fn assign_uid(&mut self) -> String {
        if let Some(existing) = self.uid() {
            return existing.to_string();
        }
        let uid = Uuid::new_v4().to_string();
        self.set_uid(&uid);
        uid
    }

    fn extended_properties(&self) -> Option<&BTreeMap<String, String>> {
        own_value(self, common::EXTENDED_PROPERTIES).and_then(FieldValue::as_properties)
    }

    fn set_extended_properties(&mut self, properties: BTreeMap<String, String>) {
        own_set(self, common::EXTENDED_PROPERTIES, properties.into());
    }
}
