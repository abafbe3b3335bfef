//! Column identifiers for all entity types.
//!
//! Every field of an entity is addressed by a small integer column ID. Each
//! ownership level owns a disjoint ID range; a concrete type recognizes its
//! own columns plus everything up its schema chain. Persistence and wire
//! layers enumerate these IDs to decide what to move.

/// Integer identifier for one field of an entity.
pub type ColumnId = i32;

/// Base columns every persisted object carries.
pub mod object {
    use super::ColumnId;

    pub const OBJECT_ID: ColumnId = 1;
    pub const CREATED_BY: ColumnId = 2;
    pub const MODIFIED_BY: ColumnId = 3;
    pub const CREATION_DATE: ColumnId = 4;
    pub const LAST_MODIFIED: ColumnId = 5;
}

/// Columns of objects that live inside a folder.
pub mod folder_child {
    use super::ColumnId;

    pub const FOLDER_ID: ColumnId = 20;
}

/// Columns shared by all user-visible groupware items.
pub mod common {
    use super::ColumnId;

    pub const CATEGORIES: ColumnId = 100;
    pub const PRIVATE_FLAG: ColumnId = 101;
    pub const COLOR_LABEL: ColumnId = 102;
    pub const NUMBER_OF_ATTACHMENTS: ColumnId = 104;
    pub const UID: ColumnId = 105;
    pub const EXTENDED_PROPERTIES: ColumnId = 106;
}

/// Columns of calendar items (appointments and anything else scheduled).
pub mod calendar {
    use super::ColumnId;

    pub const TITLE: ColumnId = 200;
    pub const START_DATE: ColumnId = 201;
    pub const END_DATE: ColumnId = 202;
    pub const NOTE: ColumnId = 203;
    pub const RECURRENCE_TYPE: ColumnId = 204;
    pub const INTERVAL: ColumnId = 205;
    /// Number of occurrences in a recurring series. Falls back to
    /// [`OCCURRENCE`] when never set directly.
    pub const RECURRENCE_COUNT: ColumnId = 206;
    pub const OCCURRENCE: ColumnId = 207;
    pub const UNTIL: ColumnId = 208;
    /// Anchor timestamp of a recurring series, day-aligned on set.
    pub const RECURRENCE_START: ColumnId = 209;
    pub const CHANGE_EXCEPTIONS: ColumnId = 210;
    pub const DELETE_EXCEPTIONS: ColumnId = 211;
    pub const PARTICIPANTS: ColumnId = 220;
    pub const USERS: ColumnId = 221;
    pub const CONFIRMATIONS: ColumnId = 222;
    pub const ORGANIZER: ColumnId = 223;
}

/// Folder columns.
pub mod folder {
    use super::ColumnId;

    pub const FOLDER_NAME: ColumnId = 300;
    pub const MODULE: ColumnId = 301;
    pub const FOLDER_TYPE: ColumnId = 302;
    pub const PERMISSIONS: ColumnId = 303;
    pub const SUBFOLDER_FLAG: ColumnId = 304;
}

/// Appointment-specific columns.
pub mod appointment {
    use super::ColumnId;

    pub const LOCATION: ColumnId = 400;
    pub const FULL_TIME: ColumnId = 401;
    pub const SHOWN_AS: ColumnId = 402;
    pub const TIMEZONE: ColumnId = 403;
}

/// Contact-specific columns.
pub mod contact {
    use super::ColumnId;

    pub const DISPLAY_NAME: ColumnId = 500;
    pub const GIVEN_NAME: ColumnId = 501;
    pub const SUR_NAME: ColumnId = 502;
    pub const EMAIL1: ColumnId = 503;
    pub const EMAIL2: ColumnId = 504;
    pub const CELLULAR_PHONE1: ColumnId = 505;
    pub const COMPANY: ColumnId = 506;
    pub const POSITION: ColumnId = 507;
    pub const BIRTHDAY: ColumnId = 508;
}
