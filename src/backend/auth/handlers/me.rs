/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/v1/user/me, which returns
 * information about the currently authenticated user.
 *
 * # Authentication
 *
 * The route sits behind the authentication gate. The user id comes from
 * the verified identity, never from the raw header.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{MeResponse, UserResponse};
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - If the gate rejected the request
/// * `404 Not Found` - If the user no longer exists
///
/// # Example Response
///
/// ```json
/// { "user": { "id": 1, "email": "user@example.com", "name": "Ada" } }
/// ```
pub async fn get_me(
    State(pool): State<SqlitePool>,
    auth: AuthUser,
) -> Result<Json<MeResponse>, BackendError> {
    let user_id = auth.user_id()?;

    let user = get_user_by_id(&pool, user_id).await?.ok_or_else(|| {
        tracing::warn!(user_id, "authenticated user not found");
        BackendError::not_found("User not found")
    })?;

    Ok(Json(MeResponse {
        user: UserResponse::from(user),
    }))
}
