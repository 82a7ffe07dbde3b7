//! Posts Module
//!
//! The single CRUD resource of the service. Every post belongs to the user
//! that created it; publish and delete only succeed for that owner.
//!
//! # Module Structure
//!
//! ```text
//! posts/
//! ├── mod.rs      - Module exports and documentation
//! ├── db.rs       - Post model, `PostRepository` and its Postgres implementation
//! └── handlers.rs - `/post` HTTP handlers
//! ```
//!
//! # Endpoints
//!
//! | Method | Path                 | Auth | Handler        |
//! |--------|----------------------|------|----------------|
//! | GET    | `/post/feed`         | yes  | `feed`         |
//! | GET    | `/post/{id}`         | no   | `get_post`     |
//! | POST   | `/post/`             | yes  | `create_post`  |
//! | PUT    | `/post/publish/{id}` | yes  | `publish_post` |
//! | DELETE | `/post/{id}`         | yes  | `delete_post`  |

use std::sync::Arc;

/// Post model and persistence
pub mod db;

/// HTTP handlers for the `/post` endpoints
pub mod handlers;

pub use db::{AuthorSummary, FeedPost, NewPost, Post, PostRepository};
pub use handlers::{create_post, delete_post, feed, get_post, publish_post, POST_NOT_FOUND_MESSAGE};

/// Shared handle to the post repository, as held in application state
pub type PostStore = Arc<dyn PostRepository>;
