//! Backend Module
//!
//! This module contains all server-side code for the blog backend: the Axum
//! HTTP server, the authentication flow and the post resource.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state and app creation
//! - **`auth`** - Token codec, password hashing, auth service and `/user` handlers
//! - **`middleware`** - Access gate for protected routes
//! - **`posts`** - Post model, repository and `/post` handlers
//! - **`store`** - Postgres and in-memory repository implementations
//! - **`error`** - HTTP-facing error taxonomy
//! - **`extract`** - Request extractors that report failures as validation errors
//! - **`routes`** - Router assembly
//!
//! # Request Flow
//!
//! ```text
//! request ─► router ─► [access gate] ─► handler ─► service / repository ─► store
//!                            │                              │
//!                            └── 401 BackendError ◄─────────┴── JSON response
//! ```
//!
//! Protected routes run the access gate first, which verifies the bearer
//! token and attaches an `AuthenticatedUser` to the request. Handlers read it
//! back through the `AuthUser` extractor.

/// Server initialization, configuration and state
pub mod server;

/// Authentication and session handling
pub mod auth;

/// HTTP middleware
pub mod middleware;

/// Post resource
pub mod posts;

/// Repository implementations
pub mod store;

/// Error types
pub mod error;

/// Request extractors
pub mod extract;

/// Route configuration
pub mod routes;
