//! The database handle a [`Query`](crate::Query) executes against.
//!
//! The handle is borrowed, never owned: opening, pooling and closing
//! connections stay with the caller.

#[cfg(feature = "sqlite")]
mod sqlite;

use std::future::Future;

use crate::value::SqlValue;

/// A database connection handle able to run parameterized statements.
///
/// `sql` uses `?` positional placeholders and `args` holds one value per
/// placeholder, in occurrence order.
pub trait Database {
    /// A single result row.
    type Row;

    /// The handle's own error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Runs `sql` and returns every resulting row.
    fn fetch_all(
        &self,
        sql: &str,
        args: &[SqlValue],
    ) -> impl Future<Output = Result<Vec<Self::Row>, Self::Error>> + Send;

    /// Runs `sql` and returns the first resulting row, if any.
    fn fetch_optional(
        &self,
        sql: &str,
        args: &[SqlValue],
    ) -> impl Future<Output = Result<Option<Self::Row>, Self::Error>> + Send;
}

