/**
 * Backend Error Types
 *
 * The HTTP-facing error taxonomy. Lower layers (`TokenError`,
 * `RepositoryError`, `AuthError`, `SharedError`) are translated into one of
 * these variants, and each variant fixes the status code and the message a
 * client gets to see.
 *
 * # Status Mapping
 *
 * | Variant              | Status | Client message                   |
 * |----------------------|--------|----------------------------------|
 * | `Validation`         | 400    | the rule's message               |
 * | `InvalidCredentials` | 400    | `Invalid username or password`   |
 * | `MissingToken`       | 401    | given message                    |
 * | `InvalidToken`       | 401    | given message                    |
 * | `NotFound`           | 404    | given message                    |
 * | `MethodNotAllowed`   | 405    | `Method Not Allowed`             |
 * | `Conflict`           | 500    | `Error occurred`                 |
 * | `Internal`           | 500    | `Error occurred`                 |
 *
 * 5xx details are logged, never returned. So is the detail of a
 * `RepositoryError::NotFound`, which becomes a plain `Not Found`.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::RepositoryError;
use crate::shared::SharedError;

/// Uniform sign-in failure message
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

/// Message for unknown routes and missing rows
pub const NOT_FOUND_MESSAGE: &str = "Not Found";

pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method Not Allowed";

/// Body message for every 5xx response
pub const GENERIC_ERROR_MESSAGE: &str = "Error occurred";

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Malformed input, rejected before any business logic runs
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Unknown email or wrong password
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No token was presented where one is required
    #[error("missing token: {0}")]
    MissingToken(String),

    /// A token was presented but failed verification
    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// The path exists but not for this method
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Uniqueness violation; deliberately reported as a plain server error
    #[error("conflict: {0}")]
    Conflict(String),

    /// Store, hashing or signing failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl BackendError {
    pub fn missing_token(message: impl Into<String>) -> Self {
        Self::MissingToken(message.into())
    }

    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::InvalidToken(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::MissingToken(_) | Self::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Conflict(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message that is safe to put in the response body
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(SharedError::ValidationError { message, .. }) => message.clone(),
            Self::Validation(err @ SharedError::MalformedBody { .. }) => err.to_string(),
            Self::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE.to_string(),
            Self::MissingToken(message) | Self::InvalidToken(message) | Self::NotFound(message) => {
                message.clone()
            }
            Self::MethodNotAllowed => METHOD_NOT_ALLOWED_MESSAGE.to_string(),
            Self::Conflict(_) | Self::Internal(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<RepositoryError> for BackendError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(what) => {
                tracing::warn!("Repository lookup failed: {}", what);
                Self::not_found(NOT_FOUND_MESSAGE)
            }
            RepositoryError::Conflict(what) => Self::Conflict(what),
            other => Self::Internal(other.to_string()),
        }
    }
}
