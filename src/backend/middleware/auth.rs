/**
 * Authentication Middleware
 *
 * Guards routes that need a signed-in caller. The gate reads the bearer
 * token from the `Authorization` header, verifies it with the access secret
 * and attaches the caller's identity to the request extensions. Handlers
 * read it back with the `AuthUser` extractor.
 *
 * The gate is stateless: it never touches the store.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::tokens::{self, TokenError};
use crate::backend::error::BackendError;
use crate::backend::server::config::AuthConfig;

pub const MISSING_HEADER_MESSAGE: &str = "Missing authorization header";
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";

/// Caller identity taken from a verified access token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub email: String,
}

/// Verifies access tokens; holds nothing but the access secret
#[derive(Clone)]
pub struct AccessGate {
    access_secret: Arc<str>,
}

impl AccessGate {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            access_secret: Arc::from(config.access_secret.as_str()),
        }
    }

    /// Resolve the caller from request headers
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<AuthenticatedUser, BackendError> {
        let token = bearer_token(headers).ok_or_else(|| {
            tracing::warn!("Missing or malformed Authorization header");
            BackendError::missing_token(MISSING_HEADER_MESSAGE)
        })?;

        let claims = tokens::verify(token, &self.access_secret).map_err(|e| {
            match e {
                TokenError::Expired => tracing::info!("Expired access token"),
                other => tracing::warn!("Invalid access token: {}", other),
            }
            BackendError::invalid_token(INVALID_TOKEN_MESSAGE)
        })?;

        Ok(AuthenticatedUser {
            user_id: claims.user.id,
            email: claims.user.email,
        })
    }
}

/// `Bearer <token>`; any other scheme counts as no token
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Authentication middleware
///
/// Use with `axum::middleware::from_fn_with_state(gate, auth_middleware)` as
/// a `route_layer` so only the wrapped routes are gated.
///
/// Returns 401 if the token is missing or fails verification.
pub async fn auth_middleware(
    State(gate): State<AccessGate>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = gate.authenticate(request.headers())?;
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated caller
///
/// Only valid behind `auth_middleware`; on an ungated route it rejects with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::missing_token(MISSING_HEADER_MESSAGE)
            })?;

        Ok(AuthUser(user))
    }
}
