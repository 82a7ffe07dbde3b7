//! Authentication Handlers Module
//!
//! HTTP handlers for the `/user` endpoints. Each handler deserializes the
//! request, delegates to `AuthService` and shapes the response; errors are
//! returned as `BackendError`.
//!
//! # Handlers
//!
//! - **`sign_up`** - POST /user/sign-up - 201 with the public user fields
//! - **`sign_in`** - POST /user/sign-in - access token in the body, refresh cookie set
//! - **`refresh_token`** - GET /user/refresh - new access token from the cookie

/// Refresh token cookie
pub mod cookie;

/// Sign-up handler
pub mod signup;

/// Sign-in handler
pub mod signin;

/// Refresh handler
pub mod refresh;

pub use cookie::REFRESH_TOKEN_COOKIE;
pub use refresh::refresh_token;
pub use signin::sign_in;
pub use signup::sign_up;
