//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and layers
//! └── api_routes.rs   - User and blog API routes
//! ```
//!
//! # Route Overview
//!
//! - `GET /health` - Liveness probe
//! - `POST /api/v1/user/signup`, `POST /api/v1/user/signin` - Public
//! - `GET /api/v1/user/me` - Gated
//! - `/api/v1/blog/*` - Gated

/// Main router creation
pub mod router;

/// API route configuration
pub mod api_routes;

pub use router::create_router;
