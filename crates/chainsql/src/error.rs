//! Error types for query execution.

use thiserror::Error;

/// Errors returned when executing a [`Query`](crate::Query).
///
/// `E` is the error type of the bound [`Database`](crate::Database) handle.
#[derive(Debug, Error)]
pub enum QueryError<E> {
    /// Execution was requested but no database handle is bound.
    #[error("no database bound to query")]
    MissingDatabase,

    /// A database handle is bound but the query has no FROM table.
    #[error("query has no FROM table")]
    EmptyStatement,

    /// Error reported by the database handle, passed through unchanged.
    #[error(transparent)]
    Database(E),
}

impl<E> QueryError<E> {
    /// Returns true if no database handle was bound.
    #[must_use]
    pub const fn is_missing_database(&self) -> bool {
        matches!(self, Self::MissingDatabase)
    }

    /// Returns the handle's error, if that is what this is.
    #[must_use]
    pub const fn as_database(&self) -> Option<&E> {
        match self {
            Self::Database(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for query execution.
pub type Result<T, E> = std::result::Result<T, QueryError<E>>;
