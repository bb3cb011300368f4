/**
 * Blog Types
 *
 * Row model and response shapes for the blog endpoints. Everything sent to
 * clients is camelCase.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::SharedError;

/// Default page size for `GET /bulk`
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Largest page size a client may request
pub const MAX_PAGE_SIZE: i64 = 100;

/// A blog post joined with its author's name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub author_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response to create and update
#[derive(Debug, Serialize, Deserialize)]
pub struct BlogWriteResponse {
    pub id: i64,
    pub message: String,
}

/// Body of `GET /{id}`
#[derive(Debug, Serialize, Deserialize)]
pub struct BlogResponse {
    pub blog: Blog,
}

/// Body of `GET /bulk`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogListResponse {
    pub blogs: Vec<Blog>,
    pub total_items: i64,
    pub page: i64,
    pub limit: i64,
}

/// Raw `page` / `limit` query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Validated pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Pagination {
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl PageQuery {
    pub fn resolve(&self) -> Result<Pagination, SharedError> {
        let page = self.page.unwrap_or(1);
        if page < 1 {
            return Err(SharedError::validation("page", "page must be at least 1"));
        }

        let limit = self.limit.unwrap_or(DEFAULT_PAGE_SIZE);
        if !(1..=MAX_PAGE_SIZE).contains(&limit) {
            return Err(SharedError::validation(
                "limit",
                format!("limit must be between 1 and {}", MAX_PAGE_SIZE),
            ));
        }

        // OFFSET is bound as a signed 64-bit integer
        if (page - 1).checked_mul(limit).is_none() {
            return Err(SharedError::validation("page", "page is too large"));
        }

        Ok(Pagination { page, limit })
    }
}
