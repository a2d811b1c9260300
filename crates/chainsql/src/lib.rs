//! # chainsql
//!
//! A chainable builder for `SELECT` statements.
//!
//! A [`Query`] collects a primary table, joins, WHERE predicates and ORDER BY
//! expressions, renders them into one SQL string with `?` placeholders, and
//! flattens the predicate arguments into the matching order. Table names,
//! columns, join conditions and predicate templates are passed through as
//! text; nothing is parsed.
//!
//! ## Building
//!
//! ```rust
//! use chainsql::{Query, SqlValue};
//!
//! // Rendering needs no database handle type.
//! let mut query = Query::<()>::new();
//! query
//!     .from("users", ["*"])
//!     .where_clause("first_name = ?", ["Bryan"])
//!     .where_clause("last_name = ?", ["Moyles"])
//!     .order_by(["users.id ASC", "users.first_name DESC"]);
//!
//! let (sql, args) = query.build();
//! assert_eq!(
//!     sql,
//!     "SELECT * FROM users WHERE (first_name = ?) AND (last_name = ?) \
//!      ORDER BY users.id ASC, users.first_name DESC"
//! );
//! assert_eq!(args[1], SqlValue::Text(String::from("Moyles")));
//! ```
//!
//! ## Executing
//!
//! Execution borrows a [`Database`] handle bound with [`Query::using`]. With
//! the default `sqlite` feature, `sqlx::SqlitePool` is such a handle.
//!
//! ```ignore
//! let pool = SqlitePool::connect(":memory:").await?;
//! let rows = select()
//!     .from("users", ["id"])
//!     .using(&pool)
//!     .query()
//!     .await?;
//! ```
//!
//! [`Query::query`] reports a missing handle as
//! [`QueryError::MissingDatabase`]. [`Query::query_row`] panics instead;
//! [`Query::try_query_row`] is its non-panicking form.

pub mod clause;
pub mod database;
mod error;
mod query;
pub mod value;

pub use clause::{Join, JoinType, Predicate, TableRef};
pub use database::Database;
pub use error::{QueryError, Result};
pub use query::{select, Query};
pub use value::{SqlValue, ToSqlValue};

/// A [`Query`] executed against a SQLite pool.
#[cfg(feature = "sqlite")]
pub type SqliteQuery<'db> = Query<'db, sqlx::SqlitePool>;
