/**
 * Signup Handler
 *
 * This module implements the user registration handler for
 * POST /api/v1/user/signup.
 *
 * # Registration Process
 *
 * 1. Validate email format and password length
 * 2. Check if user already exists
 * 3. Hash password using bcrypt
 * 4. Create user in database
 * 5. Issue JWT token
 * 6. Return token and user info
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use bcrypt::hash;

use crate::backend::auth::handlers::types::{AuthResponse, UserResponse};
use crate::backend::auth::users::{create_user, get_user_by_email, is_unique_violation};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::SignupInput;

const EMAIL_TAKEN: &str = "Email already registered";

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - If email format is invalid or password is too short
/// * `409 Conflict` - If user with this email already exists
/// * `500 Internal Server Error` - If hashing, user creation, or token issuance fails
///
/// # Example Request
///
/// ```http
/// POST /api/v1/user/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "secret123",
///   "name": "Ada"
/// }
/// ```
///
/// # Example Response (201)
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "user": { "id": 1, "email": "user@example.com", "name": "Ada" }
/// }
/// ```
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupInput>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    let Json(request) = payload?;
    tracing::info!(email = %request.email, "signup request");

    request.validate()?;

    if get_user_by_email(&state.db_pool, &request.email).await?.is_some() {
        tracing::warn!(email = %request.email, "email already exists");
        return Err(BackendError::conflict(EMAIL_TAKEN));
    }

    let password_hash = hash(&request.password, state.password_cost)?;
    let name = request.name.as_deref().map(str::trim).unwrap_or_default();

    let user = match create_user(&state.db_pool, &request.email, name, &password_hash).await {
        Ok(user) => user,
        Err(err) if is_unique_violation(&err) => {
            tracing::warn!(email = %request.email, "email registered concurrently");
            return Err(BackendError::conflict(EMAIL_TAKEN));
        }
        Err(err) => return Err(err.into()),
    };

    let token = state.token_issuer.issue(user.id)?;

    tracing::info!(user_id = user.id, "user created");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: UserResponse::from(user),
        }),
    ))
}
