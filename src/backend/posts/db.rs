//! Database operations for posts
//!
//! Every write is owner-scoped: the match clause carries both the post id and
//! the caller's user id, and a write that matches nothing is reported as
//! `RepositoryError::NotFound`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::store::{PgStore, RepositoryError};

/// A row of the `posts` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub published: bool,
    /// Owning user
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Minimal author projection attached to feed entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub email: String,
    pub name: Option<String>,
}

/// A post joined with its author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPost {
    #[serde(flatten)]
    pub post: Post,
    pub author: AuthorSummary,
}

/// Values needed to insert a post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: Option<String>,
}

/// Post persistence used by the `/post` handlers
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Published posts written by `author_id`, oldest first
    async fn list_published_by_author(&self, author_id: i64)
        -> Result<Vec<FeedPost>, RepositoryError>;

    /// Any post by id, published or not
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepositoryError>;

    /// Insert an unpublished post owned by `author_id`
    async fn create(&self, author_id: i64, post: NewPost) -> Result<Post, RepositoryError>;

    /// Set `published = true` on a post owned by `author_id`
    async fn publish(&self, id: i64, author_id: i64) -> Result<Post, RepositoryError>;

    /// Remove a post owned by `author_id`, returning the deleted row
    async fn delete(&self, id: i64, author_id: i64) -> Result<Post, RepositoryError>;
}

#[derive(sqlx::FromRow)]
struct FeedRow {
    #[sqlx(flatten)]
    post: Post,
    author_email: String,
    author_name: Option<String>,
}

impl From<FeedRow> for FeedPost {
    fn from(row: FeedRow) -> Self {
        FeedPost {
            post: row.post,
            author: AuthorSummary {
                email: row.author_email,
                name: row.author_name,
            },
        }
    }
}

fn owned_post_missing(id: i64) -> RepositoryError {
    RepositoryError::NotFound(format!("post {} for this author", id))
}

#[async_trait]
impl PostRepository for PgStore {
    async fn list_published_by_author(
        &self,
        author_id: i64,
    ) -> Result<Vec<FeedPost>, RepositoryError> {
        let rows = sqlx::query_as::<_, FeedRow>(
            r#"
            SELECT p.id, p.title, p.content, p.published, p.author_id, p.created_at,
                   u.email AS author_email, u.name AS author_name
            FROM posts p
            JOIN users u ON u.id = p.author_id
            WHERE p.published = TRUE AND p.author_id = $1
            ORDER BY p.id
            "#,
        )
        .bind(author_id)
        .fetch_all(self.pool())
        .await?;

        Ok(rows.into_iter().map(FeedPost::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepositoryError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, published, author_id, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(post)
    }

    async fn create(&self, author_id: i64, post: NewPost) -> Result<Post, RepositoryError> {
        sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, content, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, published, author_id, created_at
            "#,
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(author_id)
        .fetch_one(self.pool())
        .await
        .map_err(|e| RepositoryError::from_write(e, "post"))
    }

    async fn publish(&self, id: i64, author_id: i64) -> Result<Post, RepositoryError> {
        sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET published = TRUE
            WHERE id = $1 AND author_id = $2
            RETURNING id, title, content, published, author_id, created_at
            "#,
        )
        .bind(id)
        .bind(author_id)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| owned_post_missing(id))
    }

    async fn delete(&self, id: i64, author_id: i64) -> Result<Post, RepositoryError> {
        sqlx::query_as::<_, Post>(
            r#"
            DELETE FROM posts
            WHERE id = $1 AND author_id = $2
            RETURNING id, title, content, published, author_id, created_at
            "#,
        )
        .bind(id)
        .bind(author_id)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| owned_post_missing(id))
    }
}
