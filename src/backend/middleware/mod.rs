//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Access gate for routes that require a signed-in caller
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use postboard::backend::middleware::{auth_middleware, AccessGate, AuthUser};
//! use postboard::backend::server::config::AuthConfig;
//!
//! async fn whoami(AuthUser(user): AuthUser) -> String {
//!     user.email
//! }
//!
//! # fn example(config: &AuthConfig) -> Router {
//! Router::new()
//!     .route("/me", get(whoami))
//!     .route_layer(middleware::from_fn_with_state(AccessGate::new(config), auth_middleware))
//! # }
//! ```

pub mod auth;

pub use auth::{auth_middleware, AccessGate, AuthUser, AuthenticatedUser};
