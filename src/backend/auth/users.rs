/**
 * User Model and Database Operations
 *
 * The `users` table, the repository trait the auth service depends on, and
 * its Postgres implementation.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::backend::store::{PgStore, RepositoryError};
use crate::shared::PublicUser;

/// User struct representing a row in the `users` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Unique email address
    pub email: String,
    /// Optional display name
    pub name: Option<String>,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Fields that may leave the server
    pub fn public(&self) -> PublicUser {
        PublicUser {
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// Values needed to insert a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: Option<String>,
    pub password_hash: String,
}

/// User persistence used by the auth service
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; `RepositoryError::Conflict` if the email is taken
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError>;

    /// Look a user up by exact email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
}

#[async_trait]
impl UserRepository for PgStore {
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, name, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, email, name, password_hash, created_at
            "#,
        )
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password_hash)
        .fetch_one(self.pool())
        .await
        .map_err(|e| RepositoryError::from_write(e, "user"))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool())
        .await?;

        Ok(user)
    }
}
