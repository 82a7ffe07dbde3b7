/**
 * Sign-in Handler
 *
 * POST /user/sign-in
 *
 * Verifies credentials, returns the access token in the body and sets the
 * refresh token cookie. Failures for an unknown email and a wrong password
 * are indistinguishable.
 */

use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::handlers::cookie::refresh_cookie;
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::backend::extract::ApiJson;
use crate::shared::{AccessTokenResponse, SignInRequest};

pub const SIGN_IN_MESSAGE: &str = "Logged in successfully";

/// Sign a user in
///
/// # Example Response (200)
///
/// ```http
/// Set-Cookie: refresh-token=eyJ...; HttpOnly; SameSite=Strict; Path=/
///
/// { "message": "Logged in successfully", "accessToken": "eyJ..." }
/// ```
///
/// # Errors
///
/// * `400 Bad Request` - malformed body, or `Invalid username or password`
pub async fn sign_in(
    State(auth): State<AuthService>,
    jar: CookieJar,
    ApiJson(request): ApiJson<SignInRequest>,
) -> Result<(CookieJar, Json<AccessTokenResponse>), BackendError> {
    tracing::info!("Sign-in request for: {}", request.email);

    let tokens = auth.sign_in(request).await?;
    let cookie = refresh_cookie(tokens.refresh_token, auth.config().secure_cookies);

    Ok((
        jar.add(cookie),
        Json(AccessTokenResponse {
            message: SIGN_IN_MESSAGE.to_string(),
            access_token: tokens.access_token,
        }),
    ))
}
