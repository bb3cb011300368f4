/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It runs the `AuthGate` against the Authorization
 * header and provides the verified identity to handlers.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::backend::auth::gate::{AuthError, AuthFailureKind, AuthGate, AuthResult, VerifiedIdentity};
use crate::backend::error::BackendError;

/// Authentication middleware
///
/// This middleware:
/// 1. Reads the Authorization header
/// 2. Runs it through the gate
/// 3. Attaches the verified identity to request extensions
///
/// Returns 401 with a JSON reason on any failure. The inner service is not
/// called in that case.
pub async fn require_auth(
    State(gate): State<Arc<AuthGate>>,
    mut request: Request,
    next: Next,
) -> Response {
    let outcome = gate.authenticate_header(request.headers().get(AUTHORIZATION));

    match outcome {
        AuthResult::Authorized(identity) => {
            tracing::debug!(subject_id = identity.subject_id(), "request authenticated");
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        AuthResult::Denied(err) => {
            log_denial(&err);
            BackendError::Auth(err).into_response()
        }
    }
}

fn log_denial(err: &AuthError) {
    let kind = err.kind();
    match kind {
        AuthFailureKind::UnexpectedFailure => {
            tracing::error!(kind = %kind, reason = err.reason(), error = %err, "authentication failed");
        }
        _ => {
            tracing::warn!(kind = %kind, reason = err.reason(), error = %err, "authentication rejected");
        }
    }
}

/// Axum extractor for the authenticated identity
///
/// Only succeeds on routes behind [`require_auth`].
#[derive(Clone, Debug)]
pub struct AuthUser(pub VerifiedIdentity);

impl AuthUser {
    /// Numeric user id, or an invalid-payload rejection when the subject
    /// is not one
    pub fn user_id(&self) -> Result<i64, BackendError> {
        self.0
            .numeric_id()
            .ok_or(BackendError::Auth(AuthError::InvalidPayload("subject is not a user id")))
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let identity = parts
            .extensions
            .get::<VerifiedIdentity>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("VerifiedIdentity not found in request extensions");
                BackendError::Auth(AuthError::MissingHeader)
            })?;

        Ok(AuthUser(identity))
    }
}
