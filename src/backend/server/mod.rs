//! Server Module
//!
//! Server initialization and application state.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Database pool and migrations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `AppConfig` is loaded by the binary
//! 2. **Database**: pool opened, migrations applied
//! 3. **State Creation**: gate and issuer built from the signing secret
//! 4. **Router Creation**: routes, gate and middleware layers configured
//!
//! # Example
//!
//! ```rust,no_run
//! use quillpad::backend::server::create_app;
//! use quillpad::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Database configuration
pub mod config;

/// Server initialization
pub mod init;

pub use init::{create_app, create_app_with_pool};
pub use state::AppState;
