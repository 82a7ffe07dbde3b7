//! Route Configuration Module
//!
//! Assembles the HTTP routes of the service.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs         - Module exports and documentation
//! ├── router.rs      - Main router creation, tracing and fallback
//! ├── user_routes.rs - `/user` routes (public)
//! └── post_routes.rs - `/post` routes (mostly gated)
//! ```
//!
//! # Routes
//!
//! - `POST /user/sign-up` - Register
//! - `POST /user/sign-in` - Sign in, sets the refresh cookie
//! - `GET /user/refresh` - New access token from the refresh cookie
//! - `GET /post/feed` - Caller's published posts (auth)
//! - `GET /post/{id}` - Any post by id (public)
//! - `POST /post/` - Create a post (auth)
//! - `PUT /post/publish/{id}` - Publish an owned post (auth)
//! - `DELETE /post/{id}` - Delete an owned post (auth)
//!
//! Anything else answers 404 `{"message":"Not Found","status":404}`, and a
//! known path hit with the wrong method answers 405
//! `{"message":"Method Not Allowed","status":405}`.

/// Main router creation
pub mod router;

/// `/user` routes
pub mod user_routes;

/// `/post` routes
pub mod post_routes;

pub use router::create_router;
