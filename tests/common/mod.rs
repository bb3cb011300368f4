//! Common test utilities and helpers
//!
//! This module provides shared utilities for all integration tests:
//! - In-memory database fixtures
//! - An in-process app driven with `oneshot`
//! - Authentication helpers
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod database;
pub mod test_app;

pub use auth_helpers::*;
pub use database::*;
pub use test_app::*;
