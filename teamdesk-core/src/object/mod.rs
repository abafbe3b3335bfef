//! Entity types and their typed accessor levels.

pub mod appointment;
pub mod calendar;
pub mod contact;
pub mod folder;
pub mod levels;
pub mod participant;
pub mod permission;
pub mod view;

use std::collections::{BTreeMap, HashMap};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::columns::ColumnId;
use crate::fields::FieldSet;
use crate::schema::Schema;
use crate::value::FieldValue;

/// Serialize an entity as its column map, in ascending column order.
pub(crate) fn serialize_fields<S: Serializer>(
    fields: &FieldSet,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let ordered: BTreeMap<ColumnId, &FieldValue> =
        fields.values().iter().map(|(k, v)| (*k, v)).collect();
    ordered.serialize(serializer)
}

/// Deserialize a column map into a field set, re-validating every entry
/// against the entity's schema.
pub(crate) fn deserialize_fields<'de, D: Deserializer<'de>>(
    schema: &'static Schema,
    deserializer: D,
) -> Result<FieldSet, D::Error> {
    let values = HashMap::<ColumnId, FieldValue>::deserialize(deserializer)?;
    FieldSet::from_values(schema, values).map_err(D::Error::custom)
}
