//! Shared Module
//!
//! Types that describe the HTTP contract of the service: request and response
//! bodies for the user and post endpoints, the validation rules applied to
//! them, and the error type those rules produce. Nothing in here depends on
//! the server runtime, so a client can reuse it as-is.

/// Shared error types
pub mod error;

/// Input validation rules
pub mod validation;

/// User request/response bodies
pub mod user;

/// Post request/response bodies
pub mod post;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use post::{CreatePostRequest, MessageBody};
pub use user::{AccessTokenResponse, PublicUser, SignInRequest, SignUpRequest, SignUpResponse};
