/**
 * Server Initialization
 *
 * This module builds the Axum application from an `AppConfig`.
 *
 * # Initialization Process
 *
 * 1. Open the database and apply migrations
 * 2. Build the shared state (gate, issuer, pool)
 * 3. Create and configure the router
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns `BackendError::Database` if the pool cannot be opened or the
/// migrations fail.
pub async fn create_app(config: &AppConfig) -> Result<Router, BackendError> {
    tracing::info!("Initializing quillpad backend server");

    let db_pool = load_database(&config.database_url).await?;
    Ok(create_app_with_pool(config, db_pool))
}

/// Build the application around an existing, migrated pool
pub fn create_app_with_pool(config: &AppConfig, db_pool: SqlitePool) -> Router {
    let app_state = AppState::new(config, db_pool);
    let app = create_router(app_state, config);

    tracing::info!("Router configured");
    app
}
