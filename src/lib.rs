//! Postboard - Main Library
//!
//! Postboard is a small blog backend built on Axum. It exposes post CRUD
//! scoped to an authenticated owner plus user sign-up, sign-in and
//! access-token refresh.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between the server and any HTTP client
//!   - Request/response bodies for the user and post endpoints
//!   - Input validation rules
//!   - Error types
//!
//! - **`backend`** - Server-side code
//!   - Axum router, handlers and the access-token gate
//!   - Token codec and auth service
//!   - Postgres and in-memory stores
//!
//! # Usage
//!
//! ```rust,no_run
//! use postboard::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Authentication
//!
//! Sign-in issues a one hour access token (returned in the body) and a 24 hour
//! refresh token (set as an HTTP-only, strict same-site cookie). Protected
//! routes expect `Authorization: Bearer <access token>`; `GET /user/refresh`
//! trades the cookie for a new access token.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
