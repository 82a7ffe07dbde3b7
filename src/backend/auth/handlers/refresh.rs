/**
 * Refresh Handler
 *
 * GET /user/refresh
 *
 * Reads the refresh cookie and answers with a fresh access token. The
 * refresh token itself is left untouched.
 */

use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::handlers::cookie::read_refresh_token;
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::shared::AccessTokenResponse;

pub const REFRESH_MESSAGE: &str = "Token is refreshed successfully";

/// Exchange the refresh cookie for a new access token
///
/// # Errors
///
/// * `401 Unauthorized` - `Refresh token is missing` or `Refresh token is invalid`
pub async fn refresh_token(
    State(auth): State<AuthService>,
    jar: CookieJar,
) -> Result<Json<AccessTokenResponse>, BackendError> {
    let access_token = auth.refresh(read_refresh_token(&jar))?;

    Ok(Json(AccessTokenResponse {
        message: REFRESH_MESSAGE.to_string(),
        access_token,
    }))
}
