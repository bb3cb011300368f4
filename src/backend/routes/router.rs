/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Health probe
 * 2. User and blog APIs
 * 3. Static SPA bundle (when configured)
 * 4. JSON 404 fallback
 *
 * # Layers
 *
 * From outermost: CORS, request id, HTTP trace spans.
 */

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method, StatusCode,
    },
    middleware::from_fn,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::request_id;
use crate::backend::routes::api_routes::{
    configure_blog_routes, configure_user_routes, BLOG_API_PREFIX, USER_API_PREFIX,
};
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Shared state (pool, gate, issuer)
/// * `config` - Used for the CORS origin and static directory
pub fn create_router(app_state: AppState, config: &AppConfig) -> Router<()> {
    let router = Router::new()
        .route("/health", get(health))
        .nest(USER_API_PREFIX, configure_user_routes(&app_state))
        .nest(BLOG_API_PREFIX, configure_blog_routes(&app_state));

    let router = match &config.static_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "serving static files");
            let index = ServeFile::new(dir.join("index.html"));
            router.fallback_service(ServeDir::new(dir).fallback(index))
        }
        None => router.fallback(not_found),
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(request_id))
        .layer(cors_layer(config.cors_origin.as_deref()))
        .with_state(app_state)
}

/// Liveness probe
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn not_found() -> BackendError {
    BackendError::handler(StatusCode::NOT_FOUND, "Not found")
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let Some(origin) = origin else {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    };

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    match HeaderValue::from_str(origin) {
        Ok(value) => layer.allow_origin(value),
        Err(_) => {
            tracing::warn!(origin, "ignoring unparseable CORS origin");
            layer
        }
    }
}
