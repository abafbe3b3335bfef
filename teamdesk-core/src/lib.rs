//! Core domain types for the teamdesk groupware ecosystem.
//!
//! This crate provides the entity model shared by the server components:
//! - appointments, contacts and folders stored as sparse column-addressed
//!   field sets with per-field presence
//! - field-by-field equality and change detection
//! - the `diff` module computing participant/confirmation/exception
//!   differences between two snapshots of an item, used for update
//!   notifications

pub mod columns;
pub mod compare;
pub mod config;
pub mod diff;
pub mod error;
pub mod fields;
pub mod object;
pub mod schema;
pub mod time;
pub mod value;

pub use columns::ColumnId;
pub use config::CoreConfig;
pub use error::{TeamdeskError, TeamdeskResult};
pub use fields::{FieldAccess, FieldSet};
pub use value::{FieldKind, FieldValue};

pub use object::appointment::{Appointment, ShownAs};
pub use object::calendar::{CalendarFields, RecurrenceType};
pub use object::contact::Contact;
pub use object::folder::{Folder, FolderModule, FolderType};
pub use object::levels::{CommonFields, FolderChildFields, ObjectFields};
pub use object::participant::{
    ConfirmStatus, ConfirmableParticipant, Participant, ParticipantKey, ParticipantKind,
    UserParticipant,
};
pub use object::permission::{AccessLevel, Permission};
pub use object::view::FolderView;

pub use compare::{ColumnChange, changed_columns, content_equals, identity_hash};
pub use diff::{ConfirmationChange, Difference, FieldDifference, differences};
