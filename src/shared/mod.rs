//! Shared Module
//!
//! Types shared between the server and API clients: configuration, request
//! input schemas with their validation rules, and the shared error type.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Request input schemas
pub mod inputs;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, SigningSecret};
pub use error::SharedError;
pub use inputs::{CreatePostInput, SigninInput, SignupInput, UpdatePostInput};
