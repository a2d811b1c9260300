#![allow(dead_code)]

use chainsql::SqliteQuery;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

pub async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create in-memory SQLite pool")
}

/// Pool with `users` and `payments` tables and a few rows.
pub async fn seeded_pool() -> SqlitePool {
    let pool = memory_pool().await;
    for sql in [
        "CREATE TABLE users (id INTEGER PRIMARY KEY, first_name TEXT NOT NULL, last_name TEXT NOT NULL)",
        "CREATE TABLE payments (id INTEGER PRIMARY KEY, user_id INTEGER NOT NULL, amount INTEGER NOT NULL, is_approved BOOLEAN NOT NULL)",
        "INSERT INTO users (id, first_name, last_name) VALUES (1, 'Bryan', 'Moyles'), (2, 'Ada', 'Lovelace'), (3, 'Bryan', 'Adams')",
        "INSERT INTO payments (user_id, amount, is_approved) VALUES (1, 5, 1), (1, 25, 1), (2, 40, 0), (3, 15, 1)",
    ] {
        sqlx::query(sql)
            .execute(&pool)
            .await
            .unwrap_or_else(|e| panic!("Failed to seed: {sql}\nError: {e:?}"));
    }
    pool
}

pub fn users<'db>(columns: &[&str]) -> SqliteQuery<'db> {
    let mut query = SqliteQuery::new();
    query.from("users", columns.iter().copied());
    query
}
