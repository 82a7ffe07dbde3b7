/**
 * Post Handlers
 *
 * Handlers for the `/post` endpoints. The caller's identity always comes
 * from the access gate (`AuthUser`), never from the request body, and every
 * write is scoped to posts the caller owns.
 *
 * `GET /post/{id}` is the odd one out: it is public, and a missing post is
 * answered with 200 and a message body rather than a 404.
 */

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::BackendError;
use crate::backend::extract::{ApiJson, PostId};
use crate::backend::middleware::AuthUser;
use crate::backend::posts::db::{FeedPost, NewPost, Post};
use crate::backend::posts::PostStore;
use crate::backend::store::RepositoryError;
use crate::shared::{CreatePostRequest, MessageBody};

pub const POST_NOT_FOUND_MESSAGE: &str = "Post not found";

/// Owner-scoped writes that match nothing become a plain 404
fn owned_write_error(err: RepositoryError) -> BackendError {
    match err {
        RepositoryError::NotFound(_) => BackendError::not_found(POST_NOT_FOUND_MESSAGE),
        other => other.into(),
    }
}

/// GET /post/feed - the caller's published posts with author details
pub async fn feed(
    State(posts): State<PostStore>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<FeedPost>>, BackendError> {
    let feed = posts.list_published_by_author(user.user_id).await?;
    tracing::debug!("Feed for user {}: {} posts", user.user_id, feed.len());
    Ok(Json(feed))
}

/// GET /post/{id} - any post, published or not
pub async fn get_post(
    State(posts): State<PostStore>,
    PostId(id): PostId,
) -> Result<Response, BackendError> {
    match posts.find_by_id(id).await? {
        Some(post) => Ok(Json(post).into_response()),
        None => Ok(Json(MessageBody::new(POST_NOT_FOUND_MESSAGE)).into_response()),
    }
}

/// POST /post/ - create an unpublished post owned by the caller
///
/// # Example Request
///
/// ```json
/// { "title": "Hello", "content": "First post" }
/// ```
pub async fn create_post(
    State(posts): State<PostStore>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<CreatePostRequest>,
) -> Result<Json<Post>, BackendError> {
    request.validate()?;

    let post = posts
        .create(
            user.user_id,
            NewPost {
                title: request.title,
                content: request.content,
            },
        )
        .await?;

    tracing::info!("Post {} created by user {}", post.id, user.user_id);
    Ok(Json(post))
}

/// PUT /post/publish/{id}
///
/// # Errors
///
/// * `404 Not Found` - no post with that id owned by the caller
pub async fn publish_post(
    State(posts): State<PostStore>,
    AuthUser(user): AuthUser,
    PostId(id): PostId,
) -> Result<Json<Post>, BackendError> {
    let post = posts.publish(id, user.user_id).await.map_err(|e| {
        tracing::warn!("Publish of post {} by user {} failed: {}", id, user.user_id, e);
        owned_write_error(e)
    })?;

    tracing::info!("Post {} published", post.id);
    Ok(Json(post))
}

/// DELETE /post/{id} - returns the deleted post
///
/// # Errors
///
/// * `404 Not Found` - no post with that id owned by the caller
pub async fn delete_post(
    State(posts): State<PostStore>,
    AuthUser(user): AuthUser,
    PostId(id): PostId,
) -> Result<Json<Post>, BackendError> {
    let post = posts.delete(id, user.user_id).await.map_err(|e| {
        tracing::warn!("Delete of post {} by user {} failed: {}", id, user.user_id, e);
        owned_write_error(e)
    })?;

    tracing::info!("Post {} deleted", post.id);
    Ok(Json(post))
}
