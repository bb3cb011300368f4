/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Numeric user id, also the token subject
    pub id: i64,
    /// User email address (unique)
    pub email: String,
    /// Display name, may be empty
    pub name: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email
/// * `name` - Display name
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user or error. A duplicate email surfaces as a unique-constraint
/// database error.
pub async fn create_user(
    pool: &SqlitePool,
    email: &str,
    name: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, name, password_hash, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING id, email, name, password_hash, created_at, updated_at
        "#,
    )
    .bind(email)
    .bind(name)
    .bind(password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, password_hash, created_at, updated_at
        FROM users
        WHERE email = ?1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, password_hash, created_at, updated_at
        FROM users
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Whether a database error is a unique-constraint violation
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// Whether a database error is a foreign-key violation, such as a post
/// written for a user that no longer exists
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}
