/**
 * Refresh Token Cookie
 *
 * The refresh token travels only in this cookie. It is `HttpOnly`,
 * `SameSite=Strict` and scoped to `/`; `Secure` is added when the server is
 * configured for HTTPS. No `Max-Age` is set, so browsers drop it with the
 * session while the token itself still expires after 24 hours.
 */

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

/// Name of the cookie carrying the refresh token
pub const REFRESH_TOKEN_COOKIE: &str = "refresh-token";

/// Build the refresh cookie for `token`
pub fn refresh_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((REFRESH_TOKEN_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .secure(secure)
        .build()
}

/// Read the refresh token from the request cookies
pub fn read_refresh_token(jar: &CookieJar) -> Option<&str> {
    jar.get(REFRESH_TOKEN_COOKIE).map(|cookie| cookie.value())
}
