/**
 * Token Codec
 *
 * Encodes and decodes the signed, expiring JWTs used for both access and
 * refresh tokens. The two token kinds share one claims layout and differ only
 * in secret and lifetime:
 *
 * ```json
 * { "user": { "id": 7, "email": "user@example.com" }, "iat": 1700000000, "exp": 1700003600 }
 * ```
 *
 * Signatures are HS256 and checked by `jsonwebtoken`. Expiry is checked here
 * against an explicit clock with zero leeway, so `verify_at` is exact and
 * testable.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Access token lifetime (1 hour)
pub const ACCESS_TOKEN_TTL_SECS: i64 = 60 * 60;

/// Refresh token lifetime (24 hours)
pub const REFRESH_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Identity carried inside every token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUser {
    /// User ID
    pub id: i64,
    /// Email at the time the token was issued
    pub email: String,
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user: TokenUser,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Token codec failures
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signature mismatch, malformed token, or claims that do not decode
    #[error("token signature is invalid")]
    InvalidSignature,

    /// Signature is fine but `exp` has passed
    #[error("token has expired")]
    Expired,

    /// Signing failed
    #[error("failed to encode token: {0}")]
    Encoding(#[source] jsonwebtoken::errors::Error),
}

/// Issue a token for `user` that expires `ttl_secs` from now
pub fn issue(user: &TokenUser, secret: &str, ttl_secs: i64) -> Result<String, TokenError> {
    issue_at(user, secret, ttl_secs, Utc::now().timestamp())
}

/// Issue a token as if the current time were `now` (Unix seconds)
pub fn issue_at(
    user: &TokenUser,
    secret: &str,
    ttl_secs: i64,
    now: i64,
) -> Result<String, TokenError> {
    let claims = Claims {
        user: user.clone(),
        iat: now,
        exp: now + ttl_secs,
    };
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&Header::new(Algorithm::HS256), &claims, &key).map_err(TokenError::Encoding)
}

/// Verify `token` against `secret` at the current time
pub fn verify(token: &str, secret: &str) -> Result<Claims, TokenError> {
    verify_at(token, secret, Utc::now().timestamp())
}

/// Verify `token` against `secret` as if the current time were `now`
///
/// # Errors
///
/// * `TokenError::InvalidSignature` - wrong secret, tampered or malformed token
/// * `TokenError::Expired` - valid signature but `now > exp`
pub fn verify_at(token: &str, secret: &str, now: i64) -> Result<Claims, TokenError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    // Expiry is checked below against the caller's clock
    validation.validate_exp = false;
    validation.leeway = 0;

    let claims = decode::<Claims>(token, &key, &validation)
        .map_err(|e| {
            tracing::debug!("Token rejected: {:?}", e.kind());
            TokenError::InvalidSignature
        })?
        .claims;

    if now > claims.exp {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}
