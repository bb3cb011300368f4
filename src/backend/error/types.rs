/**
 * Backend Error Types
 *
 * This module defines the error type returned by HTTP handlers and the
 * authentication middleware.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Request-level failures that carry their own status code: missing
 * resources, conflicts, acting on another user's post.
 *
 * ## Authentication Errors
 *
 * Gate rejections. Every kind maps to 401 with the gate's short reason.
 *
 * ## Internal Errors
 *
 * Database, password hashing and token signing failures. These map to 500
 * and never expose their detail to the client.
 */

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
};
use thiserror::Error;

use crate::backend::auth::gate::AuthError;
use crate::shared::SharedError;

/// Message sent to the client for every internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use quillpad::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid blog ID format");
/// let err = BackendError::not_found("Blog post not found");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Authentication gate rejection
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Input validation error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing or verification error
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Token signing error
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::FORBIDDEN, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::CONFLICT, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Auth` - 401 Unauthorized
    /// - `SharedError` - 400 Bad Request
    /// - `Database`, `PasswordHash`, `Token` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::PasswordHash(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Auth(err) => err.reason().to_string(),
            Self::SharedError(err) => err.message().to_string(),
            Self::Database(_)
            | Self::PasswordHash(_)
            | Self::Token(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for BackendError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(format!("Invalid query string: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(format!("Invalid path: {}", rejection.body_text()))
    }
}
