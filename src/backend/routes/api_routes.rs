/**
 * API Route Configuration
 *
 * # Routes
 *
 * ## User (`/api/v1/user`)
 * - `POST /signup` - User registration
 * - `POST /signin` - User login
 * - `GET /me` - Current user (gated)
 *
 * ## Blog (`/api/v1/blog`, all gated)
 * - `POST /` - Create a post
 * - `PUT /` - Edit a post
 * - `GET /bulk` - Paginated listing
 * - `GET /{id}` - Single post
 *
 * The gate is installed once per protected router with `route_layer`, so
 * unmatched paths fall through to the 404 fallback instead of a 401.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, signin, signup};
use crate::backend::blog::{create_blog, get_blog, list_blogs, update_blog};
use crate::backend::middleware::require_auth;
use crate::backend::server::state::AppState;

/// Mount point of the user routes
pub const USER_API_PREFIX: &str = "/api/v1/user";

/// Mount point of the blog routes
pub const BLOG_API_PREFIX: &str = "/api/v1/blog";

/// Configure user routes
///
/// Signup and signin are public; `/me` requires a bearer token.
pub fn configure_user_routes(state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin));

    let protected = Router::new()
        .route("/me", get(get_me))
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    public.merge(protected)
}

/// Configure blog routes, all behind the gate
pub fn configure_blog_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_blog).put(update_blog))
        .route("/bulk", get(list_blogs))
        .route("/{id}", get(get_blog))
        .route_layer(from_fn_with_state(state.clone(), require_auth))
}
