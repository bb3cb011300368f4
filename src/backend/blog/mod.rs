//! Blog Module
//!
//! Posts written by registered users. All routes are gated.
//!
//! - **`types`** - Row model, response bodies, pagination
//! - **`db`** - Database operations
//! - **`handlers`** - HTTP handlers

pub mod db;

pub mod handlers;

pub mod types;

pub use handlers::{create_blog, get_blog, list_blogs, update_blog};
pub use types::{Blog, BlogListResponse, BlogResponse, BlogWriteResponse, Pagination};
