/**
 * Postgres Store
 *
 * Owns the sqlx connection pool. Query code for users and posts lives in
 * `auth::users` and `posts::db`.
 */

use sqlx::postgres::{PgPool, PgPoolOptions};

use super::RepositoryError;

/// Default pool size
const MAX_CONNECTIONS: u32 = 10;

/// Postgres-backed repository
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `database_url`
    pub async fn connect(database_url: &str) -> Result<Self, RepositoryError> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Apply pending migrations from `./migrations`
    pub async fn migrate(&self) -> Result<(), RepositoryError> {
        sqlx::migrate!().run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
