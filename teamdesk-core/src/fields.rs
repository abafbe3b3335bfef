//! Sparse field storage with per-field presence.
//!
//! A [`FieldSet`] holds the explicitly-set fields of one entity. Presence is
//! tracked independently of values: a field that was never set (or was
//! removed) is absent, which callers can distinguish from any stored value.

use std::collections::HashMap;

use crate::columns::ColumnId;
use crate::error::{TeamdeskError, TeamdeskResult};
use crate::schema::{FieldSpec, Schema};
use crate::value::FieldValue;

/// Uniform access to an entity's fields by column id.
///
/// All four operations dispatch through the entity's schema chain and fail
/// with [`TeamdeskError::UnknownColumn`] for ids no level recognizes.
pub trait FieldAccess {
    fn schema(&self) -> &'static Schema;

    /// Store `value` under `column` and mark it present. The value's shape
    /// must match the column's declared kind; a failed set mutates nothing.
    fn set(&mut self, column: ColumnId, value: FieldValue) -> TeamdeskResult<()>;

    /// The stored value, or `None` if the column was never set. Does not
    /// fail for unset known columns.
    fn get(&self, column: ColumnId) -> TeamdeskResult<Option<&FieldValue>>;

    /// Whether the column was explicitly set and not subsequently removed.
    fn contains(&self, column: ColumnId) -> TeamdeskResult<bool>;

    /// Clear the column, returning the previous value.
    fn remove(&mut self, column: ColumnId) -> TeamdeskResult<Option<FieldValue>>;

    /// Restore the freshly-constructed empty state in place.
    fn reset(&mut self);
}

/// The field store backing every entity type.
#[derive(Debug, Clone)]
pub struct FieldSet {
    schema: &'static Schema,
    values: HashMap<ColumnId, FieldValue>,
}

impl FieldSet {
    pub fn new(schema: &'static Schema) -> FieldSet {
        FieldSet {
            schema,
            values: HashMap::new(),
        }
    }

    /// Build a field set from a raw column map, validating every entry
    /// against the schema. Used when deserializing entities off the wire.
    pub fn from_values(
        schema: &'static Schema,
        values: HashMap<ColumnId, FieldValue>,
    ) -> TeamdeskResult<FieldSet> {
        let mut fields = FieldSet::new(schema);
        for (column, value) in values {
            fields.set(column, value)?;
        }
        Ok(fields)
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// The raw column map, for serialization.
    pub fn values(&self) -> &HashMap<ColumnId, FieldValue> {
        &self.values
    }

    /// Columns currently present, in ascending id order.
    pub fn present_columns(&self) -> Vec<ColumnId> {
        let mut out: Vec<ColumnId> = self.values.keys().copied().collect();
        out.sort_unstable();
        out
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn spec(&self, column: ColumnId) -> TeamdeskResult<&'static FieldSpec> {
        self.schema
            .lookup(column)
            .ok_or(TeamdeskError::UnknownColumn {
                entity: self.schema.entity,
                column,
            })
    }

    pub fn set(&mut self, column: ColumnId, value: FieldValue) -> TeamdeskResult<()> {
        let spec = self.spec(column)?;
        if value.kind() != spec.kind {
            return Err(TeamdeskError::TypeMismatch {
                column,
                name: spec.name,
                expected: spec.kind,
                actual: value.kind(),
            });
        }
        self.values.insert(column, spec.normalize.apply(value));
        Ok(())
    }

    pub fn get(&self, column: ColumnId) -> TeamdeskResult<Option<&FieldValue>> {
        let spec = self.spec(column)?;
        match self.values.get(&column) {
            Some(value) => Ok(Some(value)),
            None => match spec.fallback {
                Some(fallback) => Ok(self.values.get(&fallback)),
                None => Ok(None),
            },
        }
    }

    pub fn contains(&self, column: ColumnId) -> TeamdeskResult<bool> {
        let spec = self.spec(column)?;
        if self.values.contains_key(&column) {
            return Ok(true);
        }
        Ok(spec
            .fallback
            .is_some_and(|fallback| self.values.contains_key(&fallback)))
    }

    /// Removal is strictly per-column; fallback columns stay untouched.
    pub fn remove(&mut self, column: ColumnId) -> TeamdeskResult<Option<FieldValue>> {
        self.spec(column)?;
        Ok(self.values.remove(&column))
    }

    pub fn reset(&mut self) {
        self.values.clear();
    }
}

/// Fetch a column that is guaranteed by the caller's own schema.
pub(crate) fn own_value<T: FieldAccess + ?Sized>(
    entity: &T,
    column: ColumnId,
) -> Option<&FieldValue> {
    entity
        .get(column)
        .expect("column belongs to this entity's schema")
}

/// Set a column that is guaranteed by the caller's own schema.
pub(crate) fn own_set<T: FieldAccess + ?Sized>(entity: &mut T, column: ColumnId, value: FieldValue) {
    entity
        .set(column, value)
        .expect("column belongs to this entity's schema");
}

/// Presence of a column that is guaranteed by the caller's own schema.
pub(crate) fn own_contains<T: FieldAccess + ?Sized>(entity: &T, column: ColumnId) -> bool {
    entity
        .contains(column)
        .expect("column belongs to this entity's schema")
}
