//! The result shape all differs produce.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::columns::ColumnId;

/// What changed on one collection-valued column between two snapshots of the
/// same item: items only in the update, items only in the original, and
/// matched items whose sub-values differ.
///
/// Transient, computed on demand and handed to the notification layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Difference<T, C = ()> {
    /// Column the difference belongs to.
    pub column: ColumnId,
    pub added: Vec<T>,
    pub removed: Vec<T>,
    pub changed: Vec<C>,
}

impl<T, C> Difference<T, C> {
    pub(crate) fn new(column: ColumnId) -> Difference<T, C> {
        Difference {
            column,
            added: Vec::new(),
            removed: Vec::new(),
            changed: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    /// A difference only counts when at least one list is non-empty.
    pub(crate) fn into_option(self) -> Option<Difference<T, C>> {
        if self.is_empty() { None } else { Some(self) }
    }
}

impl<T, C> fmt::Display for Difference<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "column {}: {} added, {} removed, {} changed",
            self.column,
            self.added.len(),
            self.removed.len(),
            self.changed.len()
        )
    }
}
