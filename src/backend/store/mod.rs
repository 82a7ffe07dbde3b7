//! Store Module
//!
//! Concrete homes for the `UserRepository` and `PostRepository` traits.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs       - RepositoryError and re-exports
//! ├── postgres.rs  - PgStore (sqlx pool + migrations)
//! └── memory.rs    - MemoryStore (process-local tables)
//! ```
//!
//! The trait implementations for `PgStore` sit next to the queries they run,
//! in `auth::users` and `posts::db`.

use thiserror::Error;

/// Postgres-backed store
pub mod postgres;

/// In-memory store
pub mod memory;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors raised by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Driver or connection failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A uniqueness constraint rejected the write
    #[error("Conflict: {0}")]
    Conflict(String),

    /// No row matched (including owner-scoped writes against someone else's row)
    #[error("Not found: {0}")]
    NotFound(String),
}

impl RepositoryError {
    /// Translate constraint violations into `Conflict`/`NotFound`, keep the rest
    pub(crate) fn from_write(err: sqlx::Error, what: &str) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Self::Conflict(format!("{} already exists", what));
            }
            if db_err.is_foreign_key_violation() {
                return Self::NotFound(format!("referenced row for {} does not exist", what));
            }
        }
        Self::Database(err)
    }
}
