//! Backend Error Module
//!
//! Error types returned by HTTP handlers and middleware.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and its status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use postboard::backend::error::BackendError;
//!
//! async fn handler() -> Result<String, BackendError> {
//!     Err(BackendError::not_found("Post not found"))
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{
    BackendError, GENERIC_ERROR_MESSAGE, INVALID_CREDENTIALS_MESSAGE, METHOD_NOT_ALLOWED_MESSAGE,
    NOT_FOUND_MESSAGE,
};
