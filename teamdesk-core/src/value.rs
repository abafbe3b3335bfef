//! Dynamic field values.
//!
//! Entities store their state as a sparse map of column id to [`FieldValue`].
//! Every value knows its [`FieldKind`], which `set` checks against the
//! column's declared kind before anything is stored.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::object::participant::{ConfirmableParticipant, Participant, UserParticipant};
use crate::object::permission::Permission;

/// A value stored under one column of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldValue {
    Int(i32),
    Bool(bool),
    Text(String),
    /// Point in time, compared by instant.
    Timestamp(DateTime<Utc>),
    Date(NaiveDate),
    Participants(Vec<Participant>),
    Users(Vec<UserParticipant>),
    Confirmations(Vec<ConfirmableParticipant>),
    /// Exception date lists of recurring series.
    Dates(Vec<NaiveDate>),
    Permissions(Vec<Permission>),
    /// Free-form extended properties.
    Properties(BTreeMap<String, String>),
}

/// Runtime shape of a [`FieldValue`], declared per column in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Int,
    Bool,
    Text,
    Timestamp,
    Date,
    Participants,
    Users,
    Confirmations,
    Dates,
    Permissions,
    Properties,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Int => "int",
            FieldKind::Bool => "bool",
            FieldKind::Text => "text",
            FieldKind::Timestamp => "timestamp",
            FieldKind::Date => "date",
            FieldKind::Participants => "participants",
            FieldKind::Users => "users",
            FieldKind::Confirmations => "confirmations",
            FieldKind::Dates => "dates",
            FieldKind::Permissions => "permissions",
            FieldKind::Properties => "properties",
        };
        f.write_str(name)
    }
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Int(_) => FieldKind::Int,
            FieldValue::Bool(_) => FieldKind::Bool,
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Timestamp(_) => FieldKind::Timestamp,
            FieldValue::Date(_) => FieldKind::Date,
            FieldValue::Participants(_) => FieldKind::Participants,
            FieldValue::Users(_) => FieldKind::Users,
            FieldValue::Confirmations(_) => FieldKind::Confirmations,
            FieldValue::Dates(_) => FieldKind::Dates,
            FieldValue::Permissions(_) => FieldKind::Permissions,
            FieldValue::Properties(_) => FieldKind::Properties,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            FieldValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Timestamp(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_participants(&self) -> Option<&[Participant]> {
        match self {
            FieldValue::Participants(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_users(&self) -> Option<&[UserParticipant]> {
        match self {
            FieldValue::Users(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_confirmations(&self) -> Option<&[ConfirmableParticipant]> {
        match self {
            FieldValue::Confirmations(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_dates(&self) -> Option<&[NaiveDate]> {
        match self {
            FieldValue::Dates(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_permissions(&self) -> Option<&[Permission]> {
        match self {
            FieldValue::Permissions(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_properties(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            FieldValue::Properties(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> FieldValue {
        FieldValue::Int(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> FieldValue {
        FieldValue::Bool(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> FieldValue {
        FieldValue::Text(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> FieldValue {
        FieldValue::Text(v.to_string())
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(v: DateTime<Utc>) -> FieldValue {
        FieldValue::Timestamp(v)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(v: NaiveDate) -> FieldValue {
        FieldValue::Date(v)
    }
}

impl From<BTreeMap<String, String>> for FieldValue {
    fn from(v: BTreeMap<String, String>) -> FieldValue {
        FieldValue::Properties(v)
    }
}

// Collection columns accept both owned vectors and borrowed slices.
macro_rules! collection_value {
    ($item:ty, $variant:ident) => {
        impl From<Vec<$item>> for FieldValue {
            fn from(v: Vec<$item>) -> FieldValue {
                FieldValue::$variant(v)
            }
        }

        impl From<&[$item]> for FieldValue {
            fn from(v: &[$item]) -> FieldValue {
                FieldValue::$variant(v.to_vec())
            }
        }
    };
}

collection_value!(Participant, Participants);
collection_value!(UserParticipant, Users);
collection_value!(ConfirmableParticipant, Confirmations);
collection_value!(NaiveDate, Dates);
collection_value!(Permission, Permissions);
