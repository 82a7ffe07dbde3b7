/**
 * Request Extractors
 *
 * Wrappers around axum's extractors that report bad input as
 * `BackendError::Validation` (400 with the usual JSON error body) instead of
 * axum's plain-text rejections.
 */

use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;
use crate::shared::validation::parse_post_id;
use crate::shared::SharedError;

/// JSON body extractor with JSON error responses
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                Err(malformed(rejection).into())
            }
        }
    }
}

fn malformed(rejection: JsonRejection) -> SharedError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            SharedError::malformed("Expected a JSON body with Content-Type: application/json")
        }
        other => SharedError::malformed(other.body_text()),
    }
}

/// The `{id}` path segment of a post route, parsed as a positive integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostId(pub i64);

impl<S> FromRequestParts<S> for PostId
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| SharedError::validation("id", e.body_text()))?;

        let id = parse_post_id(&raw).map_err(|e| {
            tracing::warn!("Rejected post id '{}'", raw);
            e
        })?;

        Ok(PostId(id))
    }
}
