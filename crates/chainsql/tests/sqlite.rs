//! Executing built queries against an in-memory SQLite database.

#![cfg(feature = "sqlite")]

mod common;
use common::*;

use chainsql::{select, QueryError, SqliteQuery};
use sqlx::Row;

#[tokio::test]
async fn query_without_database_is_missing_database() {
    let query = SqliteQuery::new();
    let err = query.query().await.err().expect("query should fail");
    assert!(matches!(err, QueryError::MissingDatabase));
}

#[tokio::test]
async fn query_against_missing_table_is_database_error() {
    let pool = memory_pool().await;
    let mut query = users(&["id"]);
    query.using(&pool);

    let err = query.query().await.err().expect("query should fail");
    assert!(!err.is_missing_database());
    assert!(matches!(err, QueryError::Database(sqlx::Error::Database(_))));
    assert!(err.to_string().contains("no such table"));
}

#[tokio::test]
async fn query_row_against_missing_table_is_database_error() {
    let pool = memory_pool().await;
    let mut query = users(&["id"]);
    query.using(&pool);

    let err = query.query_row().await.err().expect("query should fail");
    assert!(err.as_database().is_some());
}

#[tokio::test]
#[should_panic(expected = "query_row called without a database")]
async fn query_row_without_database_panics() {
    let query = SqliteQuery::new();
    let _ = query.query_row().await;
}

#[tokio::test]
async fn query_with_chained_where_binds_in_order() {
    let pool = seeded_pool().await;
    let mut query = users(&["id", "last_name"]);
    query
        .using(&pool)
        .where_clause("first_name = ?", ["Bryan"])
        .where_clause("last_name = ?", ["Moyles"]);

    let rows = query.query().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get::<i64, _>("id"), 1);
    assert_eq!(rows[0].get::<String, _>("last_name"), "Moyles");
}

#[tokio::test]
async fn query_with_join_where_and_order_by() {
    let pool = seeded_pool().await;
    let mut query = select();
    query
        .from("users", ["users.id"])
        .inner_join("payments", "payments.user_id = users.id", ["amount"])
        .where_clause("payments.amount > ? AND payments.is_approved", [10])
        .order_by(["amount DESC"])
        .using(&pool);

    let rows = query.query().await.unwrap();
    let amounts: Vec<i64> = rows.iter().map(|r| r.get("amount")).collect();
    assert_eq!(amounts, [25, 15]);
}

#[tokio::test]
async fn left_join_keeps_unmatched_rows() {
    let pool = seeded_pool().await;
    sqlx::query("INSERT INTO users (id, first_name, last_name) VALUES (4, 'Grace', 'Hopper')")
        .execute(&pool)
        .await
        .unwrap();

    let mut query = users(&["users.id"]);
    query
        .left_join("payments", "payments.user_id = users.id", ["amount"])
        .where_clause("users.id = ?", [4])
        .using(&pool);

    let row = query.query_row().await.unwrap().expect("user 4 exists");
    assert_eq!(row.get::<Option<i64>, _>("amount"), None);
}

#[tokio::test]
async fn query_row_with_no_match_is_none() {
    let pool = seeded_pool().await;
    let mut query = users(&["id"]);
    query.where_clause("first_name = ?", ["Nobody"]).using(&pool);

    assert!(query.query_row().await.unwrap().is_none());
}

#[tokio::test]
async fn query_without_table_is_not_executed() {
    let pool = seeded_pool().await;
    let mut query = SqliteQuery::new();
    query.using(&pool).where_clause("id = ?", [1]);

    let err = query.query().await.err().expect("query should fail");
    assert!(matches!(err, QueryError::EmptyStatement));
}
