//! Authentication Gate
//!
//! Decides, for one request, whether the presented `Authorization` header
//! carries a valid credential. Each request walks
//!
//! ```text
//! Received → HeaderChecked → TokenParsed → SignatureVerified → PayloadValidated → Authorized
//! ```
//!
//! and drops into `Rejected` at the first failing step. The outcome is an
//! explicit [`AuthResult`]; the gate keeps no state between requests and
//! performs no I/O beyond the signature check.

use axum::http::HeaderValue;
use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;

use crate::backend::auth::sessions::{PresentedClaims, TokenVerifier};
use crate::shared::SigningSecret;

/// Authentication scheme accepted in the `Authorization` header
pub const BEARER_SCHEME: &str = "Bearer";

/// Identity established by the gate for a single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    subject_id: String,
}

impl VerifiedIdentity {
    /// String form of the token's `id` claim
    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    /// The subject as a numeric user id, if it is one
    pub fn numeric_id(&self) -> Option<i64> {
        self.subject_id.parse().ok()
    }
}

/// Coarse failure category, used for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailureKind {
    MalformedCredential,
    InvalidCredential,
    InvalidPayload,
    UnexpectedFailure,
}

impl AuthFailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedCredential => "malformed_credential",
            Self::InvalidCredential => "invalid_credential",
            Self::InvalidPayload => "invalid_payload",
            Self::UnexpectedFailure => "unexpected_failure",
        }
    }
}

impl std::fmt::Display for AuthFailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why the gate rejected a request.
///
/// `Display` carries the internal detail for logs; [`AuthError::reason`] is
/// the short string sent to the client.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing authorization header")]
    MissingHeader,

    #[error("malformed authorization header: {0}")]
    MalformedHeader(&'static str),

    #[error("token rejected: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    #[error("token payload has no usable subject: {0}")]
    InvalidPayload(&'static str),

    #[error("unexpected verification failure: {0}")]
    Unexpected(String),
}

impl AuthError {
    pub fn kind(&self) -> AuthFailureKind {
        match self {
            Self::MissingHeader | Self::MalformedHeader(_) => AuthFailureKind::MalformedCredential,
            Self::InvalidToken(_) => AuthFailureKind::InvalidCredential,
            Self::InvalidPayload(_) => AuthFailureKind::InvalidPayload,
            Self::Unexpected(_) => AuthFailureKind::UnexpectedFailure,
        }
    }

    /// Client-facing reason string
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingHeader => "Unauthorized: Missing JWT",
            Self::MalformedHeader(_) => "Unauthorized: Invalid JWT format",
            Self::InvalidPayload(_) => "Unauthorized: Invalid token payload",
            Self::InvalidToken(_) | Self::Unexpected(_) => {
                "Unauthorized: Token verification failed"
            }
        }
    }
}

/// Outcome of authenticating one request
#[derive(Debug)]
pub enum AuthResult {
    Authorized(VerifiedIdentity),
    Denied(AuthError),
}

impl AuthResult {
    pub fn into_result(self) -> Result<VerifiedIdentity, AuthError> {
        match self {
            Self::Authorized(identity) => Ok(identity),
            Self::Denied(err) => Err(err),
        }
    }
}

impl From<Result<VerifiedIdentity, AuthError>> for AuthResult {
    fn from(result: Result<VerifiedIdentity, AuthError>) -> Self {
        match result {
            Ok(identity) => Self::Authorized(identity),
            Err(err) => Self::Denied(err),
        }
    }
}

/// The reusable authentication gate installed on protected routes
#[derive(Clone)]
pub struct AuthGate {
    verifier: TokenVerifier,
}

impl AuthGate {
    pub fn new(secret: &SigningSecret) -> Self {
        Self {
            verifier: TokenVerifier::new(secret),
        }
    }

    /// Authenticate a raw header value as received on the wire
    pub fn authenticate_header(&self, header: Option<&HeaderValue>) -> AuthResult {
        match header {
            None => AuthResult::Denied(AuthError::MissingHeader),
            Some(value) => match value.to_str() {
                Ok(raw) => self.authenticate(Some(raw)),
                Err(_) => AuthResult::Denied(AuthError::MalformedHeader("non-ASCII header value")),
            },
        }
    }

    /// Authenticate an `Authorization` header value
    pub fn authenticate(&self, header: Option<&str>) -> AuthResult {
        self.run(header).into()
    }

    fn run(&self, header: Option<&str>) -> Result<VerifiedIdentity, AuthError> {
        let token = parse_bearer(header)?;
        let claims = self.verifier.verify(token).map_err(classify_token_error)?;
        let subject_id = subject_from_claims(&claims)?;
        Ok(VerifiedIdentity { subject_id })
    }
}

/// Split `Bearer <token>` into its token, rejecting every other shape
fn parse_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::MissingHeader)?;
    let parts: Vec<&str> = header.split(' ').collect();
    match parts.as_slice() {
        [scheme, token] if *scheme == BEARER_SCHEME => {
            if token.is_empty() {
                Err(AuthError::MalformedHeader("empty bearer token"))
            } else {
                Ok(*token)
            }
        }
        [_, _] => Err(AuthError::MalformedHeader("unsupported authorization scheme")),
        [_] => Err(AuthError::MalformedHeader("expected `Bearer <token>`")),
        _ => Err(AuthError::MalformedHeader("too many segments")),
    }
}

fn classify_token_error(err: jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        ErrorKind::InvalidToken
        | ErrorKind::InvalidSignature
        | ErrorKind::ExpiredSignature
        | ErrorKind::ImmatureSignature
        | ErrorKind::InvalidAlgorithm
        | ErrorKind::InvalidAudience
        | ErrorKind::InvalidIssuer
        | ErrorKind::InvalidSubject
        | ErrorKind::MissingRequiredClaim(_)
        | ErrorKind::InvalidClaimFormat(_)
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_) => AuthError::InvalidToken(err),
        _ => AuthError::Unexpected(err.to_string()),
    }
}

fn subject_from_claims(claims: &PresentedClaims) -> Result<String, AuthError> {
    match &claims.id {
        None => Err(AuthError::InvalidPayload("missing `id` claim")),
        Some(serde_json::Value::Number(n)) => Ok(render_number(n)),
        Some(serde_json::Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(serde_json::Value::String(_)) => Err(AuthError::InvalidPayload("empty `id` claim")),
        Some(_) => Err(AuthError::InvalidPayload("`id` claim is not a scalar")),
    }
}

/// `42` and `42.0` name the same subject
fn render_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}
