//! Authentication test helpers
//!
//! Provides utilities for creating test users and minting tokens.

use quillpad::backend::auth::sessions::TokenIssuer;
use quillpad::shared::{AppConfig, SigningSecret};
use serde_json::json;
use uuid::Uuid;

use super::test_app::TestApp;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_PASSWORD: &str = "test_password_123";

/// Test user credentials
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Configuration used by every integration test
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .database_url(super::database::TEST_DATABASE_URL)
        // Lowest cost bcrypt accepts, keeps tests fast
        .password_cost(4)
        .build()
        .expect("Failed to build test config")
}

pub fn test_secret() -> SigningSecret {
    SigningSecret::new(TEST_SECRET)
}

/// Issue a token for `id` with the test secret
pub fn token_for(id: i64) -> String {
    TokenIssuer::new(&test_secret(), std::time::Duration::from_secs(3600))
        .issue(id)
        .expect("Failed to create test token")
}

/// Sign an arbitrary payload with `secret`
pub fn sign_payload(secret: &str, payload: &serde_json::Value) -> String {
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        payload,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign test payload")
}

/// Register a user through the API
pub async fn signup_user(app: &TestApp, email: &str, name: &str) -> TestUser {
    let response = app
        .post(
            "/api/v1/user/signup",
            None,
            json!({ "email": email, "password": TEST_PASSWORD, "name": name }),
        )
        .await;
    assert_eq!(response.status, 201, "signup failed: {}", response.body);

    TestUser {
        id: response.body["user"]["id"].as_i64().expect("user id"),
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
        token: response.body["token"].as_str().expect("token").to_string(),
    }
}

/// Register a user with a unique email
pub async fn signup_unique_user(app: &TestApp) -> TestUser {
    let email = format!("test_{}@example.com", Uuid::new_v4().simple());
    signup_user(app, &email, "Test User").await
}
