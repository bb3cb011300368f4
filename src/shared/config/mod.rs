//! Application configuration module
//!
//! Configuration is assembled once at process start and never mutated
//! afterwards. Values come from three layers, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. An optional TOML file named by `QUILLPAD_CONFIG`
//! 3. Environment variables
//!
//! The signing secret has no default. A process without `JWT_SECRET` refuses
//! to start rather than signing tokens with a well-known key.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Default SQLite database location
pub const DEFAULT_DATABASE_URL: &str = "sqlite://quillpad.db";

/// Default listen port
pub const DEFAULT_SERVER_PORT: u16 = 8787;

/// Default lifetime of issued tokens (30 days)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Environment variable naming an optional TOML config file
pub const CONFIG_FILE_ENV: &str = "QUILLPAD_CONFIG";

/// Shared HMAC secret used to sign and verify credential tokens.
///
/// `Debug` never prints the key material.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningSecret(String);

impl SigningSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret([REDACTED])")
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Secret shared by the credential issuer and the authentication gate
    pub jwt_secret: SigningSecret,
    /// sqlx SQLite connection URL
    pub database_url: String,
    /// Port the HTTP server binds on
    pub server_port: u16,
    /// Lifetime embedded in issued tokens
    pub token_ttl: Duration,
    /// bcrypt cost factor for password hashing
    pub password_cost: u32,
    /// Origin allowed to call the API from a browser. `None` allows any.
    pub cors_origin: Option<String>,
    /// Directory holding a built single-page client to serve
    pub static_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// `from_env` is this with `std::env::var`; tests pass a map instead.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = match lookup(CONFIG_FILE_ENV) {
            Some(path) => AppConfigBuilder::from_file(path)?,
            None => AppConfigBuilder::default(),
        };

        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(port) = lookup("SERVER_PORT") {
            builder = builder.server_port(parse_value("SERVER_PORT", &port)?);
        }
        if let Some(ttl) = lookup("JWT_TTL_SECS") {
            let secs: u64 = parse_value("JWT_TTL_SECS", &ttl)?;
            builder = builder.token_ttl(Duration::from_secs(secs));
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            builder = builder.password_cost(parse_value("BCRYPT_COST", &cost)?);
        }
        if let Some(origin) = lookup("CORS_ORIGIN") {
            builder = builder.cors_origin(origin);
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            builder = builder.static_dir(dir);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.token_ttl.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "JWT_TTL_SECS",
                value: "0".to_string(),
            });
        }
        if !(4..=31).contains(&self.password_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.password_cost.to_string(),
            });
        }
        if let Some(origin) = &self.cors_origin {
            if axum::http::HeaderValue::from_str(origin).is_err() {
                return Err(ConfigError::InvalidValue {
                    key: "CORS_ORIGIN",
                    value: origin.clone(),
                });
            }
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

/// Shape of the optional TOML config file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    jwt_secret: Option<String>,
    database_url: Option<String>,
    server_port: Option<u16>,
    token_ttl_secs: Option<u64>,
    password_cost: Option<u32>,
    cors_origin: Option<String>,
    static_dir: Option<PathBuf>,
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    jwt_secret: Option<SigningSecret>,
    database_url: Option<String>,
    server_port: Option<u16>,
    token_ttl: Option<Duration>,
    password_cost: Option<u32>,
    cors_origin: Option<String>,
    static_dir: Option<PathBuf>,
}

impl AppConfigBuilder {
    /// Seed a builder from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Seed a builder from TOML text
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(raw)?;
        Ok(Self {
            jwt_secret: file.jwt_secret.map(SigningSecret::new),
            database_url: file.database_url,
            server_port: file.server_port,
            token_ttl: file.token_ttl_secs.map(Duration::from_secs),
            password_cost: file.password_cost,
            cors_origin: file.cors_origin,
            static_dir: file.static_dir,
        })
    }

    /// Set the signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(SigningSecret::new(secret));
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the listen port
    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    /// Set the lifetime of issued tokens
    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    /// Set the bcrypt cost factor
    pub fn password_cost(mut self, cost: u32) -> Self {
        self.password_cost = Some(cost);
        self
    }

    /// Restrict cross-origin calls to one origin
    pub fn cors_origin(mut self, origin: impl Into<String>) -> Self {
        self.cors_origin = Some(origin.into());
        self
    }

    /// Serve a built client bundle from this directory
    pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            jwt_secret: self
                .jwt_secret
                .ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            server_port: self.server_port.unwrap_or(DEFAULT_SERVER_PORT),
            token_ttl: self.token_ttl.unwrap_or(DEFAULT_TOKEN_TTL),
            password_cost: self.password_cost.unwrap_or(bcrypt::DEFAULT_COST),
            cors_origin: self.cors_origin,
            static_dir: self.static_dir,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = AppConfig::builder().jwt_secret("s3cret").build().unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.server_port, DEFAULT_SERVER_PORT);
        assert_eq!(config.token_ttl, DEFAULT_TOKEN_TTL);
        assert_eq!(config.password_cost, bcrypt::DEFAULT_COST);
        assert!(config.cors_origin.is_none());
    }

    #[test]
    fn test_missing_secret_is_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[]));
        assert_matches!(result, Err(ConfigError::MissingValue("JWT_SECRET")));
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[("JWT_SECRET", "")]));
        assert_matches!(result, Err(ConfigError::MissingValue("JWT_SECRET")));
    }

    #[test]
    fn test_env_values_parsed() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "abc"),
            ("SERVER_PORT", "9000"),
            ("JWT_TTL_SECS", "60"),
            ("BCRYPT_COST", "6"),
            ("DATABASE_URL", "sqlite::memory:"),
        ]))
        .unwrap();
        assert_eq!(config.server_port, 9000);
        assert_eq!(config.token_ttl, Duration::from_secs(60));
        assert_eq!(config.password_cost, 6);
        assert_eq!(config.database_url, "sqlite::memory:");
    }

    #[test]
    fn test_bad_port_is_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "abc"),
            ("SERVER_PORT", "not-a-port"),
        ]));
        assert_matches!(result, Err(ConfigError::InvalidValue { key: "SERVER_PORT", .. }));
    }

    #[test]
    fn test_out_of_range_cost_is_rejected() {
        let result = AppConfig::builder().jwt_secret("abc").password_cost(2).build();
        assert_matches!(result, Err(ConfigError::InvalidValue { key: "BCRYPT_COST", .. }));
    }

    #[test]
    fn test_zero_ttl_is_rejected() {
        let result = AppConfig::builder()
            .jwt_secret("abc")
            .token_ttl(Duration::ZERO)
            .build();
        assert_matches!(result, Err(ConfigError::InvalidValue { key: "JWT_TTL_SECS", .. }));
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            b"jwt_secret = \"from-file\"\nserver_port = 4000\npassword_cost = 5\n",
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let config = AppConfig::from_lookup(lookup_from(&[
            (CONFIG_FILE_ENV, path.as_str()),
            ("SERVER_PORT", "5000"),
        ]))
        .unwrap();

        assert_eq!(config.jwt_secret, SigningSecret::new("from-file"));
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.password_cost, 5);
    }

    #[test]
    fn test_unknown_file_key_is_rejected() {
        let result = AppConfigBuilder::from_toml_str("jwt_secrt = \"typo\"");
        assert_matches!(result, Err(ConfigError::Toml(_)));
    }

    #[test]
    fn test_secret_debug_is_redacted() {
        let secret = SigningSecret::new("super-secret-value");
        let rendered = format!("{:?}", secret);
        assert!(!rendered.contains("super-secret-value"));
        assert!(rendered.contains("REDACTED"));
    }
}
