//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for the user endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Response types
//! ├── signup.rs   - User registration handler
//! ├── signin.rs   - User authentication handler
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/v1/user/signup - User registration
//! - **`signin`** - POST /api/v1/user/signin - User authentication
//! - **`get_me`** - GET /api/v1/user/me - Get current user info (gated)

/// Response types
pub mod types;

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

/// Get current user handler
pub mod me;

pub use types::{AuthResponse, MeResponse, UserResponse};

pub use me::get_me;
pub use signin::signin;
pub use signup::signup;
