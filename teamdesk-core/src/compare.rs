//! Field-by-field entity comparison.
//!
//! Two flavors: identity equality spans the full schema chain and backs
//! `PartialEq`/`Hash` on the entity types; content equality skips the
//! object-level housekeeping columns (ids, modification bookkeeping) so that
//! a re-saved copy still counts as the same content.

use std::hash::{DefaultHasher, Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::columns::ColumnId;
use crate::fields::FieldAccess;
use crate::schema;
use crate::value::FieldValue;

fn is_housekeeping(column: ColumnId) -> bool {
    schema::OBJECT.own.iter().any(|spec| spec.id == column)
}

/// Presence-and-value equality over an explicit column set.
pub fn fields_equal<A, B>(a: &A, b: &B, columns: &[ColumnId]) -> bool
where
    A: FieldAccess + ?Sized,
    B: FieldAccess + ?Sized,
{
    columns.iter().all(|&column| {
        let in_a = a.contains(column).unwrap_or(false);
        let in_b = b.contains(column).unwrap_or(false);
        if in_a != in_b {
            return false;
        }
        if !in_a {
            return true;
        }
        match (a.get(column), b.get(column)) {
            (Ok(x), Ok(y)) => x == y,
            _ => false,
        }
    })
}

/// Equality over the full schema chain.
pub fn identity_equals<T: FieldAccess + ?Sized>(a: &T, b: &T) -> bool {
    fields_equal(a, b, &a.schema().column_ids())
}

/// Equality over everything except object-level housekeeping.
pub fn content_equals<T: FieldAccess + ?Sized>(a: &T, b: &T) -> bool {
    let columns: Vec<ColumnId> = a
        .schema()
        .column_ids()
        .into_iter()
        .filter(|&column| !is_housekeeping(column))
        .collect();
    fields_equal(a, b, &columns)
}

/// Fold every present field into `state` in fixed schema order. Consistent
/// with [`identity_equals`].
pub fn fold_fields<T, H>(entity: &T, state: &mut H)
where
    T: FieldAccess + ?Sized,
    H: Hasher,
{
    for spec in entity.schema().specs() {
        if let Ok(Some(value)) = entity.get(spec.id) {
            spec.id.hash(state);
            value.hash(state);
        }
    }
}

/// Standalone identity hash of an entity.
pub fn identity_hash<T: FieldAccess + ?Sized>(entity: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    fold_fields(entity, &mut hasher);
    hasher.finish()
}

/// Before/after pair for one changed column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnChange {
    pub column: ColumnId,
    pub old: Option<FieldValue>,
    pub new: Option<FieldValue>,
}

/// Per-column change detection over an explicit column set. A column counts
/// as changed when exactly one side has it present, or both do and the
/// values differ. Timestamps compare by instant.
pub fn changed_columns<A, B>(original: &A, update: &B, columns: &[ColumnId]) -> Vec<ColumnChange>
where
    A: FieldAccess + ?Sized,
    B: FieldAccess + ?Sized,
{
    let mut changes = Vec::new();
    for &column in columns {
        let old = original.get(column).ok().flatten();
        let new = update.get(column).ok().flatten();
        let differ = match (old, new) {
            (Some(o), Some(n)) => o != n,
            (None, None) => false,
            _ => true,
        };
        if differ {
            changes.push(ColumnChange {
                column,
                old: old.cloned(),
                new: new.cloned(),
            });
        }
    }
    changes
}
