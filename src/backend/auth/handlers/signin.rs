/**
 * Signin Handler
 *
 * This module implements the user authentication handler for
 * POST /api/v1/user/signin.
 *
 * Unknown emails and wrong passwords produce the same 401 response.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use bcrypt::verify;

use crate::backend::auth::handlers::types::{AuthResponse, UserResponse};
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::SigninInput;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Sign in handler
///
/// # Errors
///
/// * `400 Bad Request` - If the body fails validation
/// * `401 Unauthorized` - If the email is unknown or the password is wrong
/// * `500 Internal Server Error` - If verification or token issuance fails
pub async fn signin(
    State(state): State<AppState>,
    payload: Result<Json<SigninInput>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload?;
    tracing::info!(email = %request.email, "signin request");

    request.validate()?;

    let Some(user) = get_user_by_email(&state.db_pool, &request.email).await? else {
        tracing::warn!(email = %request.email, "signin for unknown email");
        return Err(BackendError::handler(StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS));
    };

    if !verify(&request.password, &user.password_hash)? {
        tracing::warn!(user_id = user.id, "signin with wrong password");
        return Err(BackendError::handler(StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS));
    }

    let token = state.token_issuer.issue(user.id)?;

    tracing::info!(user_id = user.id, "user signed in");

    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from(user),
    }))
}
