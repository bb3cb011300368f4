//! Database test fixtures
//!
//! Every test gets its own in-memory SQLite database with migrations
//! applied, so tests never share rows.

use quillpad::backend::server::config::load_database;
use sqlx::SqlitePool;

pub const TEST_DATABASE_URL: &str = "sqlite::memory:";

/// Create a fresh, migrated in-memory pool
pub async fn create_test_pool() -> SqlitePool {
    load_database(TEST_DATABASE_URL)
        .await
        .expect("Failed to create test database pool")
}

/// Remove a user row directly, bypassing the API
pub async fn delete_user(pool: &SqlitePool, id: i64) {
    sqlx::query("DELETE FROM users WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await
        .expect("Failed to delete test user");
}
