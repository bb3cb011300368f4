//! Shared Error Types
//!
//! Validation failures raised by the request input schemas. A client can
//! run the same checks before sending a body; the server maps them to 400.
//!
//! ```rust
//! use quillpad::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "Title is required");
//! assert_eq!(error.field(), "title");
//! ```
use thiserror::Error;

/// Input rejected by a schema's `validate()`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Invalid input: {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Message sent to the client
        message: String,
    },
}

impl SharedError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}
