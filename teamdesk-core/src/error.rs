//! Error types for the teamdesk domain layer.

use thiserror::Error;

use crate::columns::ColumnId;
use crate::value::FieldKind;

/// Errors that can occur in teamdesk domain operations.
#[derive(Error, Debug)]
pub enum TeamdeskError {
    #[error("Unknown column {column} for {entity}")]
    UnknownColumn {
        entity: &'static str,
        column: ColumnId,
    },

    #[error("Type mismatch for column {column} ({name}): expected {expected}, got {actual}")]
    TypeMismatch {
        column: ColumnId,
        name: &'static str,
        expected: FieldKind,
        actual: FieldKind,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown timezone: {0}")]
    Timezone(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for teamdesk domain operations.
pub type TeamdeskResult<T> = Result<T, TeamdeskError>;
