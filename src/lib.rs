//! Quillpad - Main Library
//!
//! Quillpad is a small blogging backend: users sign up and sign in, receive
//! an HS256 bearer token, and use it to write and read blog posts.
//!
//! # Module Structure
//!
//! - **`shared`** - Types a client can reuse
//!   - Configuration (`AppConfig`, `SigningSecret`)
//!   - Request input schemas and their validation
//!   - Error types
//!
//! - **`backend`** - The Axum server
//!   - Authentication gate and credential issuer
//!   - User and blog handlers
//!   - SQLite persistence and migrations
//!
//! # Usage
//!
//! ```rust,no_run
//! use quillpad::backend::server::create_app;
//! use quillpad::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::builder()
//!     .jwt_secret("change-me")
//!     .database_url("sqlite::memory:")
//!     .build()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for input validation
//! - `shared::config::ConfigError` for startup configuration
//! - `backend::error::BackendError` for everything a handler can return

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
