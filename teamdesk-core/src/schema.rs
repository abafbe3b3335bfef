//! Static field schemas for each entity type.
//!
//! A schema lists the columns one ownership level recognizes and links to
//! its parent level; lookups walk the chain until a level claims the column.
//! Concrete entity types each point at the leaf of their chain.

use crate::columns::ColumnId;
use crate::columns::{appointment, calendar, common, contact, folder, folder_child, object};
use crate::time;
use crate::value::{FieldKind, FieldValue};

/// Value normalization applied when a column is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalize {
    None,
    /// Truncate a timestamp to the start of its day in the reference
    /// timezone. Recurrence math downstream assumes day-aligned anchors.
    DayStart,
}

impl Normalize {
    pub(crate) fn apply(self, value: FieldValue) -> FieldValue {
        match (self, value) {
            (Normalize::DayStart, FieldValue::Timestamp(ts)) => {
                FieldValue::Timestamp(time::start_of_day(ts))
            }
            (_, value) => value,
        }
    }
}

/// Declaration of a single column: id, human-readable name, expected shape.
#[derive(Debug)]
pub struct FieldSpec {
    pub id: ColumnId,
    pub name: &'static str,
    pub kind: FieldKind,
    pub normalize: Normalize,
    /// Column consulted by `get`/`contains` when this one was never set.
    pub fallback: Option<ColumnId>,
}

impl FieldSpec {
    pub const fn new(id: ColumnId, name: &'static str, kind: FieldKind) -> FieldSpec {
        FieldSpec {
            id,
            name,
            kind,
            normalize: Normalize::None,
            fallback: None,
        }
    }

    pub const fn day_aligned(mut self) -> FieldSpec {
        self.normalize = Normalize::DayStart;
        self
    }

    pub const fn with_fallback(mut self, column: ColumnId) -> FieldSpec {
        self.fallback = Some(column);
        self
    }
}

/// One level of an entity's field table, linked to its parent level.
#[derive(Debug)]
pub struct Schema {
    /// Name of the concrete entity type this schema is the leaf of (or the
    /// level name for intermediate levels).
    pub entity: &'static str,
    pub own: &'static [FieldSpec],
    pub parent: Option<&'static Schema>,
}

impl Schema {
    /// Resolve a column anywhere in the chain.
    pub fn lookup(&self, column: ColumnId) -> Option<&FieldSpec> {
        match self.own.iter().find(|spec| spec.id == column) {
            Some(spec) => Some(spec),
            None => self.parent.and_then(|p| p.lookup(column)),
        }
    }

    /// All column specs in fixed order: parent chain first, then own.
    pub fn specs(&self) -> Vec<&FieldSpec> {
        let mut out = match self.parent {
            Some(p) => p.specs(),
            None => Vec::new(),
        };
        out.extend(self.own.iter());
        out
    }

    /// The full recognized column-ID list, in the same fixed order.
    /// Persistence and wire layers enumerate this to decide what to move.
    pub fn column_ids(&self) -> Vec<ColumnId> {
        self.specs().iter().map(|spec| spec.id).collect()
    }
}

/// Base level: identity and modification bookkeeping.
pub static OBJECT: Schema = Schema {
    entity: "object",
    own: &[
        FieldSpec::new(object::OBJECT_ID, "object_id", FieldKind::Int),
        FieldSpec::new(object::CREATED_BY, "created_by", FieldKind::Int),
        FieldSpec::new(object::MODIFIED_BY, "modified_by", FieldKind::Int),
        FieldSpec::new(object::CREATION_DATE, "creation_date", FieldKind::Timestamp),
        FieldSpec::new(object::LAST_MODIFIED, "last_modified", FieldKind::Timestamp),
    ],
    parent: None,
};

pub static FOLDER_CHILD: Schema = Schema {
    entity: "folder_child",
    own: &[FieldSpec::new(
        folder_child::FOLDER_ID,
        "folder_id",
        FieldKind::Int,
    )],
    parent: Some(&OBJECT),
};

pub static COMMON: Schema = Schema {
    entity: "common",
    own: &[
        FieldSpec::new(common::CATEGORIES, "categories", FieldKind::Text),
        FieldSpec::new(common::PRIVATE_FLAG, "private_flag", FieldKind::Bool),
        FieldSpec::new(common::COLOR_LABEL, "color_label", FieldKind::Int),
        FieldSpec::new(
            common::NUMBER_OF_ATTACHMENTS,
            "number_of_attachments",
            FieldKind::Int,
        ),
        FieldSpec::new(common::UID, "uid", FieldKind::Text),
        FieldSpec::new(
            common::EXTENDED_PROPERTIES,
            "extended_properties",
            FieldKind::Properties,
        ),
    ],
    parent: Some(&FOLDER_CHILD),
};

pub static CALENDAR: Schema = Schema {
    entity: "calendar",
    own: &[
        FieldSpec::new(calendar::TITLE, "title", FieldKind::Text),
        FieldSpec::new(calendar::START_DATE, "start_date", FieldKind::Timestamp),
        FieldSpec::new(calendar::END_DATE, "end_date", FieldKind::Timestamp),
        FieldSpec::new(calendar::NOTE, "note", FieldKind::Text),
        FieldSpec::new(calendar::RECURRENCE_TYPE, "recurrence_type", FieldKind::Int),
        FieldSpec::new(calendar::INTERVAL, "interval", FieldKind::Int),
        FieldSpec::new(calendar::RECURRENCE_COUNT, "recurrence_count", FieldKind::Int)
            .with_fallback(calendar::OCCURRENCE),
        FieldSpec::new(calendar::OCCURRENCE, "occurrence", FieldKind::Int),
        FieldSpec::new(calendar::UNTIL, "until", FieldKind::Date),
        FieldSpec::new(
            calendar::RECURRENCE_START,
            "recurrence_start",
            FieldKind::Timestamp,
        )
        .day_aligned(),
        FieldSpec::new(
            calendar::CHANGE_EXCEPTIONS,
            "change_exceptions",
            FieldKind::Dates,
        ),
        FieldSpec::new(
            calendar::DELETE_EXCEPTIONS,
            "delete_exceptions",
            FieldKind::Dates,
        ),
        FieldSpec::new(
            calendar::PARTICIPANTS,
            "participants",
            FieldKind::Participants,
        ),
        FieldSpec::new(calendar::USERS, "users", FieldKind::Users),
        FieldSpec::new(
            calendar::CONFIRMATIONS,
            "confirmations",
            FieldKind::Confirmations,
        ),
        FieldSpec::new(calendar::ORGANIZER, "organizer", FieldKind::Text),
    ],
    parent: Some(&COMMON),
};

pub static APPOINTMENT: Schema = Schema {
    entity: "appointment",
    own: &[
        FieldSpec::new(appointment::LOCATION, "location", FieldKind::Text),
        FieldSpec::new(appointment::FULL_TIME, "full_time", FieldKind::Bool),
        FieldSpec::new(appointment::SHOWN_AS, "shown_as", FieldKind::Int),
        FieldSpec::new(appointment::TIMEZONE, "timezone", FieldKind::Text),
    ],
    parent: Some(&CALENDAR),
};

pub static CONTACT: Schema = Schema {
    entity: "contact",
    own: &[
        FieldSpec::new(contact::DISPLAY_NAME, "display_name", FieldKind::Text),
        FieldSpec::new(contact::GIVEN_NAME, "given_name", FieldKind::Text),
        FieldSpec::new(contact::SUR_NAME, "sur_name", FieldKind::Text),
        FieldSpec::new(contact::EMAIL1, "email1", FieldKind::Text),
        FieldSpec::new(contact::EMAIL2, "email2", FieldKind::Text),
        FieldSpec::new(contact::CELLULAR_PHONE1, "cellular_phone1", FieldKind::Text),
        FieldSpec::new(contact::COMPANY, "company", FieldKind::Text),
        FieldSpec::new(contact::POSITION, "position", FieldKind::Text),
        FieldSpec::new(contact::BIRTHDAY, "birthday", FieldKind::Date),
    ],
    parent: Some(&COMMON),
};

pub static FOLDER: Schema = Schema {
    entity: "folder",
    own: &[
        FieldSpec::new(folder::FOLDER_NAME, "folder_name", FieldKind::Text),
        FieldSpec::new(folder::MODULE, "module", FieldKind::Int),
        FieldSpec::new(folder::FOLDER_TYPE, "folder_type", FieldKind::Int),
        FieldSpec::new(folder::PERMISSIONS, "permissions", FieldKind::Permissions),
        FieldSpec::new(folder::SUBFOLDER_FLAG, "subfolder_flag", FieldKind::Bool),
    ],
    parent: Some(&OBJECT),
};
