//! Shared Error Types
//!
//! Errors produced by the shared request types before anything reaches the
//! business logic.
//!
//! # Error Categories
//!
//! - `ValidationError` - A field failed one of the rules in `validation`
//! - `MalformedBody` - The request body could not be decoded at all
//!
//! # Usage
//!
//! ```rust
//! use postboard::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "Invalid email address");
//! assert_eq!(error.field(), Some("email"));
//! ```
use thiserror::Error;

/// Errors raised while checking client input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Body was not valid JSON or did not match the expected shape
    #[error("Malformed request body: {message}")]
    MalformedBody {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new malformed-body error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }

    /// Name of the offending field, when the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
            Self::MalformedBody { .. } => None,
        }
    }
}
