//! Store error types.
//!
//! Every rejected store operation surfaces exactly one of three error kinds.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.

use miette::Diagnostic;
use thiserror::Error;

/// Store operation errors.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum DbError {
    /// Malformed or missing required input. Checked before any lookup.
    #[error("{message}")]
    #[diagnostic(code(todolist::db::invalid_argument))]
    InvalidArgument { message: String },

    /// The referenced list or item does not exist.
    #[error("{message}")]
    #[diagnostic(code(todolist::db::not_found))]
    NotFound { message: String },

    /// A list with the requested name already exists.
    #[error("{message}")]
    #[diagnostic(
        code(todolist::db::conflict),
        help("List names are compared exactly, including case")
    )]
    Conflict { message: String },
}

impl DbError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
}

/// Result type for store operations.
pub type DbResult<T> = Result<T, DbError>;
