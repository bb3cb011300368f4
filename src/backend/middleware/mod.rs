//! Middleware Module
//!
//! This module contains all HTTP middleware for the backend server.
//! Middleware functions process requests before they reach handlers.
//!
//! # Architecture
//!
//! - **`auth`** - Authentication gate middleware and the `AuthUser` extractor
//! - **`request_id`** - Per-request id stamping for log correlation
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use quillpad::backend::auth::gate::AuthGate;
//! use quillpad::backend::middleware::{require_auth, AuthUser};
//! use quillpad::shared::SigningSecret;
//!
//! let gate = Arc::new(AuthGate::new(&SigningSecret::new("secret")));
//! let protected: Router = Router::new()
//!     .route("/me", get(|AuthUser(who): AuthUser| async move { who.subject_id().to_string() }))
//!     .route_layer(from_fn_with_state(gate, require_auth));
//! ```

pub mod auth;

pub mod request_id;

pub use auth::{require_auth, AuthUser};
pub use request_id::{request_id, REQUEST_ID_HEADER};
