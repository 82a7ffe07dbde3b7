/**
 * In-Memory Store
 *
 * Process-local implementation of both repositories. The server falls back to
 * it when `DATABASE_URL` is not set, and the test suites use it to drive the
 * full router without Postgres.
 *
 * It mirrors the Postgres constraints that the handlers depend on: unique
 * emails, author existence on post insert, and owner-scoped writes.
 */

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::backend::auth::users::{NewUser, User, UserRepository};
use crate::backend::posts::db::{AuthorSummary, FeedPost, NewPost, Post, PostRepository};
use crate::backend::store::RepositoryError;

#[derive(Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    posts: BTreeMap<i64, Post>,
    last_user_id: i64,
    last_post_id: i64,
}

/// Shared in-memory tables; clones share the same data
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored posts (test helper)
    pub async fn post_count(&self) -> usize {
        self.tables.read().await.posts.len()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError> {
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.email == user.email) {
            return Err(RepositoryError::Conflict("user already exists".to_string()));
        }

        tables.last_user_id += 1;
        let created = User {
            id: tables.last_user_id,
            email: user.email,
            name: user.name,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        tables.users.insert(created.id, created.clone());

        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn list_published_by_author(
        &self,
        author_id: i64,
    ) -> Result<Vec<FeedPost>, RepositoryError> {
        let tables = self.tables.read().await;
        let Some(author) = tables.users.get(&author_id) else {
            return Ok(Vec::new());
        };

        Ok(tables
            .posts
            .values()
            .filter(|p| p.published && p.author_id == author_id)
            .map(|p| FeedPost {
                post: p.clone(),
                author: AuthorSummary {
                    email: author.email.clone(),
                    name: author.name.clone(),
                },
            })
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepositoryError> {
        Ok(self.tables.read().await.posts.get(&id).cloned())
    }

    async fn create(&self, author_id: i64, post: NewPost) -> Result<Post, RepositoryError> {
        let mut tables = self.tables.write().await;

        if !tables.users.contains_key(&author_id) {
            return Err(RepositoryError::NotFound(
                "referenced row for post does not exist".to_string(),
            ));
        }

        tables.last_post_id += 1;
        let created = Post {
            id: tables.last_post_id,
            title: post.title,
            content: post.content,
            published: false,
            author_id,
            created_at: Utc::now(),
        };
        tables.posts.insert(created.id, created.clone());

        Ok(created)
    }

    async fn publish(&self, id: i64, author_id: i64) -> Result<Post, RepositoryError> {
        let mut tables = self.tables.write().await;

        match tables.posts.get_mut(&id) {
            Some(post) if post.author_id == author_id => {
                post.published = true;
                Ok(post.clone())
            }
            _ => Err(RepositoryError::NotFound(format!("post {} for this author", id))),
        }
    }

    async fn delete(&self, id: i64, author_id: i64) -> Result<Post, RepositoryError> {
        let mut tables = self.tables.write().await;

        let owned = matches!(tables.posts.get(&id), Some(post) if post.author_id == author_id);
        match owned.then(|| tables.posts.remove(&id)).flatten() {
            Some(post) => Ok(post),
            None => Err(RepositoryError::NotFound(format!("post {} for this author", id))),
        }
    }
}
