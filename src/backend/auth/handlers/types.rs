/**
 * Authentication Handler Types
 *
 * This module defines the response types used by authentication handlers.
 * Request bodies live in `shared::inputs` so clients can reuse them.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;

/// Auth response
///
/// Returned by signup and signin handlers. Contains the JWT token
/// and user information for immediate authentication.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// JWT token for authentication
    pub token: String,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
}

/// Body of `GET /me`
#[derive(Serialize, Deserialize, Debug)]
pub struct MeResponse {
    pub user: UserResponse,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}
