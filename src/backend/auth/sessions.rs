/**
 * Credential Tokens
 *
 * This module mints and decodes the HS256 JWTs that carry a subject id.
 * `TokenIssuer` and `TokenVerifier` are both built from the same
 * `SigningSecret`, so the payload shape and algorithm always agree.
 *
 * Issued payload:
 *
 * ```json
 * { "id": 42, "iat": 1700000000, "exp": 1702592000 }
 * ```
 *
 * `exp` is enforced when present. Tokens without one still verify, which
 * keeps credentials minted by older issuers usable until the secret rotates.
 */

use std::time::Duration;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::shared::SigningSecret;

/// Claims written into every issued token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user) id
    pub id: i64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Claims as read back from a presented token.
///
/// The subject is kept untyped so the gate can tell an absent identity
/// apart from a token that fails to parse at all.
#[derive(Debug, Clone, Deserialize)]
pub struct PresentedClaims {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub iat: Option<u64>,
    #[serde(default)]
    pub exp: Option<u64>,
}

/// Mints credential tokens
#[derive(Clone)]
pub struct TokenIssuer {
    key: EncodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &SigningSecret, ttl: Duration) -> Self {
        Self {
            key: EncodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Create a token for a subject
    ///
    /// # Arguments
    /// * `subject_id` - User id the token vouches for
    ///
    /// # Returns
    /// Signed JWT string
    pub fn issue(&self, subject_id: i64) -> Result<String, jsonwebtoken::errors::Error> {
        let now = jsonwebtoken::get_current_timestamp();
        let claims = Claims {
            id: subject_id,
            iat: now,
            exp: now.saturating_add(self.ttl.as_secs()),
        };
        self.sign(&claims)
    }

    /// Sign an arbitrary payload with the issuer's key
    pub fn sign<T: Serialize>(&self, claims: &T) -> Result<String, jsonwebtoken::errors::Error> {
        encode(&Header::new(Algorithm::HS256), claims, &self.key)
    }
}

/// Checks token signatures and expiry
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &SigningSecret) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // `exp` is checked when present but not demanded.
        validation.required_spec_claims.clear();
        validation.validate_exp = true;

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verify and decode a token
    pub fn verify(&self, token: &str) -> Result<PresentedClaims, jsonwebtoken::errors::Error> {
        let token_data = decode::<PresentedClaims>(token, &self.key, &self.validation)?;
        Ok(token_data.claims)
    }
}
