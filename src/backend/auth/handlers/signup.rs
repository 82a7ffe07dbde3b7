/**
 * Sign-up Handler
 *
 * POST /user/sign-up
 *
 * # Example Request
 *
 * ```http
 * POST /user/sign-up HTTP/1.1
 * Content-Type: application/json
 *
 * { "email": "ada@example.com", "password": "analytical", "name": "Ada" }
 * ```
 *
 * # Example Response (201)
 *
 * ```json
 * {
 *   "message": "User registered successfully",
 *   "user": { "email": "ada@example.com", "name": "Ada" }
 * }
 * ```
 */

use axum::{extract::State, http::StatusCode, Json};

use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::backend::extract::ApiJson;
use crate::shared::{SignUpRequest, SignUpResponse};

pub const SIGN_UP_MESSAGE: &str = "User registered successfully";

/// Register a user
///
/// # Errors
///
/// * `400 Bad Request` - malformed body, invalid email or short password
/// * `500 Internal Server Error` - email already registered, or a store failure
pub async fn sign_up(
    State(auth): State<AuthService>,
    ApiJson(request): ApiJson<SignUpRequest>,
) -> Result<(StatusCode, Json<SignUpResponse>), BackendError> {
    tracing::info!("Sign-up request for: {}", request.email);

    let user = auth.sign_up(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            message: SIGN_UP_MESSAGE.to_string(),
            user: user.public(),
        }),
    ))
}
