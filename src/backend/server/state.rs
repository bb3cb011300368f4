/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds:
 * - The SQLite connection pool
 * - The authentication gate
 * - The token issuer
 * - The bcrypt cost used for new passwords
 *
 * The gate and issuer are built from the same `SigningSecret` and are
 * immutable after startup, so they are shared through `Arc` without locks.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers and middleware extract only
 * the part of the state they need.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::gate::AuthGate;
use crate::backend::auth::sessions::TokenIssuer;
use crate::shared::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Gate installed on every protected router
    pub auth_gate: Arc<AuthGate>,

    /// Mints tokens on signup and signin
    pub token_issuer: Arc<TokenIssuer>,

    /// bcrypt cost for new password hashes
    pub password_cost: u32,
}

impl AppState {
    pub fn new(config: &AppConfig, db_pool: SqlitePool) -> Self {
        Self {
            db_pool,
            auth_gate: Arc::new(AuthGate::new(&config.jwt_secret)),
            token_issuer: Arc::new(TokenIssuer::new(&config.jwt_secret, config.token_ttl)),
            password_cost: config.password_cost,
        }
    }
}

/// Implement FromRef for SqlitePool
///
/// ```rust,ignore
/// async fn handler(State(pool): State<SqlitePool>) { /* ... */ }
/// ```
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Implement FromRef for the authentication gate
///
/// Used by `require_auth` when layered with `from_fn_with_state`.
impl FromRef<AppState> for Arc<AuthGate> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth_gate.clone()
    }
}

impl FromRef<AppState> for Arc<TokenIssuer> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.token_issuer.clone()
    }
}
