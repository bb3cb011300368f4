//! Blog Database Operations

use chrono::Utc;
use sqlx::SqlitePool;

use super::types::{Blog, Pagination};

const SELECT_BLOG: &str = r#"
    SELECT b.id, b.title, b.content, b.published, b.author_id,
           u.name AS author_name, b.created_at, b.updated_at
    FROM blogs b
    LEFT JOIN users u ON u.id = b.author_id
"#;

/// Insert a post and return its id
pub async fn create_blog(
    pool: &SqlitePool,
    author_id: i64,
    title: &str,
    content: &str,
) -> Result<i64, sqlx::Error> {
    let now = Utc::now();

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO blogs (title, content, author_id, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(author_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Author of a post, or None if the post does not exist
pub async fn get_blog_author(pool: &SqlitePool, id: i64) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar("SELECT author_id FROM blogs WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Apply a partial edit to a post owned by `author_id`.
///
/// Returns false when no row matched.
pub async fn update_blog(
    pool: &SqlitePool,
    id: i64,
    author_id: i64,
    title: Option<&str>,
    content: Option<&str>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE blogs
        SET title = COALESCE(?1, title),
            content = COALESCE(?2, content),
            updated_at = ?3
        WHERE id = ?4 AND author_id = ?5
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(Utc::now())
    .bind(id)
    .bind(author_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// One page of posts, newest first
pub async fn list_blogs(pool: &SqlitePool, pagination: Pagination) -> Result<Vec<Blog>, sqlx::Error> {
    let query = format!("{SELECT_BLOG} ORDER BY b.id DESC LIMIT ?1 OFFSET ?2");

    sqlx::query_as::<_, Blog>(&query)
        .bind(pagination.limit)
        .bind(pagination.offset())
        .fetch_all(pool)
        .await
}

pub async fn count_blogs(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM blogs")
        .fetch_one(pool)
        .await
}

pub async fn get_blog(pool: &SqlitePool, id: i64) -> Result<Option<Blog>, sqlx::Error> {
    let query = format!("{SELECT_BLOG} WHERE b.id = ?1");

    sqlx::query_as::<_, Blog>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
}
