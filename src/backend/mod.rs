//! Backend Module
//!
//! This module contains all server-side code for quillpad: an Axum HTTP
//! server for user accounts and blog posts, backed by SQLite.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, database
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Authentication gate, JWT tokens, user management
//! - **`blog`** - Blog post handlers and storage
//! - **`middleware`** - Gate middleware, `AuthUser` extractor, request ids
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── blog/           - Blog posts
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! ```text
//! client → CORS → request id → trace → [gate on protected routes] → handler → SQLite
//! ```
//!
//! The gate holds only immutable keys, so requests never contend on it.
//! Handlers read the caller from the `VerifiedIdentity` extension through
//! the `AuthUser` extractor and never look at the raw header.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Blog posts
pub mod blog;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use server::create_app;
