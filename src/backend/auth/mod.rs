//! Authentication Module
//!
//! This module handles user registration, credential issuance, and the
//! authentication gate that protects every non-public route.
//!
//! # Architecture
//!
//! - **`gate`** - Bearer-token authentication producing an `AuthResult`
//! - **`sessions`** - JWT issuance and verification
//! - **`users`** - User data model and database operations
//! - **`handlers`** - HTTP handlers for the user endpoints
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email and password → user created → token returned
//! 2. **Signin**: email and password → credentials verified → token returned
//! 3. **Protected request**: `Authorization: Bearer <token>` → gate verifies →
//!    handler receives the `VerifiedIdentity`
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 and signed with the process-wide `SigningSecret`
//! - Every gate failure returns 401; the failure kind is only logged

/// Authentication gate
pub mod gate;

/// JWT token generation and validation
pub mod sessions;

/// User data model and database operations
pub mod users;

/// HTTP handlers for the user endpoints
pub mod handlers;

pub use gate::{AuthError, AuthFailureKind, AuthGate, AuthResult, VerifiedIdentity};
pub use handlers::{get_me, signin, signup, AuthResponse, MeResponse, UserResponse};
pub use sessions::{Claims, TokenIssuer, TokenVerifier};
