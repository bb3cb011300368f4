//! Request input schemas
//!
//! Bodies accepted by the user and blog endpoints, together with the
//! validation rules a client is expected to apply before sending them.
//! The server re-validates every body regardless.

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// Sign-up request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupInput {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl SignupInput {
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_email(&self.email)?;
        validate_password(&self.password)
    }
}

/// Sign-in request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninInput {
    pub email: String,
    pub password: String,
}

impl SigninInput {
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_email(&self.email)?;
        validate_password(&self.password)
    }
}

/// New blog post body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
}

impl CreatePostInput {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_text("title", &self.title, "Title is required")?;
        require_text("content", &self.content, "Content is required")
    }
}

/// Blog post edit body. At least one of `title` or `content` must be set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostInput {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl UpdatePostInput {
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.title.is_none() && self.content.is_none() {
            return Err(SharedError::validation(
                "title",
                "Title or content is required",
            ));
        }
        if let Some(title) = &self.title {
            require_text("title", title, "Title cannot be empty")?;
        }
        if let Some(content) = &self.content {
            require_text("content", content, "Content cannot be empty")?;
        }
        Ok(())
    }
}

fn require_text(field: &str, value: &str, message: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, message));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), SharedError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at least {} characters long", MIN_PASSWORD_LEN),
        ));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), SharedError> {
    if !is_valid_email(email) {
        return Err(SharedError::validation("email", "Invalid email format"));
    }
    Ok(())
}

/// Structural email check: one `@`, a non-empty local part, and a domain
/// made of at least two non-empty dot-separated labels.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}
