//! SQLite backend through `sqlx`.

use std::future::Future;

use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqlitePool, SqliteRow};
use sqlx::Sqlite;

use super::Database;
use crate::value::SqlValue;

type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

impl Database for SqlitePool {
    type Row = SqliteRow;
    type Error = sqlx::Error;

    fn fetch_all(
        &self,
        sql: &str,
        args: &[SqlValue],
    ) -> impl Future<Output = Result<Vec<SqliteRow>, sqlx::Error>> + Send {
        bind_args(sql, args).fetch_all(self)
    }

    fn fetch_optional(
        &self,
        sql: &str,
        args: &[SqlValue],
    ) -> impl Future<Output = Result<Option<SqliteRow>, sqlx::Error>> + Send {
        bind_args(sql, args).fetch_optional(self)
    }
}

/// Prepares `sql` with every argument bound in order.
fn bind_args<'q>(sql: &'q str, args: &[SqlValue]) -> SqliteQuery<'q> {
    args.iter().cloned().fold(sqlx::query(sql), bind_value)
}

fn bind_value(query: SqliteQuery<'_>, value: SqlValue) -> SqliteQuery<'_> {
    match value {
        SqlValue::Null => query.bind(Option::<i64>::None),
        SqlValue::Bool(b) => query.bind(b),
        SqlValue::Int(i) => query.bind(i),
        SqlValue::Float(f) => query.bind(f),
        SqlValue::Text(s) => query.bind(s),
        SqlValue::Blob(b) => query.bind(b),
    }
}
