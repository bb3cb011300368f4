/**
 * Database Configuration
 *
 * This module opens the SQLite connection pool and applies the embedded
 * migrations.
 *
 * # Error Handling
 *
 * Unlike optional services, the database is required: connection and
 * migration failures are returned to the caller and abort startup.
 */

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

const MAX_CONNECTIONS: u32 = 8;

/// Open a connection pool and run migrations
///
/// The database file is created if missing, and foreign keys are enforced.
/// An in-memory URL gets a single connection that is never recycled, since
/// every SQLite connection would otherwise see its own empty database.
///
/// # Example
///
/// ```rust,no_run
/// use quillpad::backend::server::config::load_database;
///
/// # async fn example() -> Result<(), sqlx::Error> {
/// let pool = load_database("sqlite::memory:").await?;
/// # Ok(())
/// # }
/// ```
pub async fn load_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(5))
    };

    tracing::info!("Connecting to database...");
    let pool = pool_options.connect_with(options).await?;
    tracing::info!("Database connection pool created successfully");

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Apply the migrations embedded from `migrations/`
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!()
        .run(pool)
        .await
        .map_err(|e| sqlx::Error::Migrate(Box::new(e)))?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_detection() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file:test?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://quillpad.db"));
    }

    #[tokio::test]
    async fn test_load_in_memory_database_applies_migrations() {
        let pool = load_database("sqlite::memory:").await.unwrap();
        let tables: Vec<String> =
            sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
                .fetch_all(&pool)
                .await
                .unwrap();
        assert!(tables.contains(&"users".to_string()));
        assert!(tables.contains(&"blogs".to_string()));
    }

    #[tokio::test]
    async fn test_load_file_database_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quillpad-test.db");
        let url = format!("sqlite://{}", path.display());

        let pool = load_database(&url).await.unwrap();
        pool.close().await;
        assert!(path.exists());
    }
}
