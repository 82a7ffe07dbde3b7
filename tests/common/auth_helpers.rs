//! Authentication test helpers
//!
//! Provides utilities for creating test users, signing them in and
//! pulling the refresh cookie out of responses.

use axum::{http::StatusCode, Router};
use serde_json::json;

use postboard::backend::auth::REFRESH_TOKEN_COOKIE;

use super::app::{TestRequest, TestResponse};

pub const TEST_PASSWORD: &str = "test_password_123";

/// A signed-in test user
pub struct TestUser {
    pub access_token: String,
    /// `refresh-token=<token>`, ready for a `Cookie` header
    pub refresh_cookie: String,
}

/// POST /user/sign-up
pub async fn sign_up(app: &Router, email: &str, password: &str) -> TestResponse {
    TestRequest::post("/user/sign-up")
        .json(json!({ "email": email, "password": password, "name": "Test User" }))
        .send(app)
        .await
}

/// POST /user/sign-in
pub async fn sign_in(app: &Router, email: &str, password: &str) -> TestResponse {
    TestRequest::post("/user/sign-in")
        .json(json!({ "email": email, "password": password }))
        .send(app)
        .await
}

/// The `name=value` pair of the refresh cookie, if the response set one
pub fn refresh_cookie(response: &TestResponse) -> Option<String> {
    let prefix = format!("{}=", REFRESH_TOKEN_COOKIE);
    response
        .set_cookies()
        .into_iter()
        .find(|c| c.starts_with(&prefix))
        .and_then(|c| c.split(';').next().map(str::to_string))
}

/// Sign up and sign in `email`, panicking if either step fails
pub async fn create_test_user(app: &Router, email: &str) -> TestUser {
    let response = sign_up(app, email, TEST_PASSWORD).await;
    assert_eq!(response.status, StatusCode::CREATED, "sign-up failed: {}", response.body);

    let response = sign_in(app, email, TEST_PASSWORD).await;
    assert_eq!(response.status, StatusCode::OK, "sign-in failed: {}", response.body);

    TestUser {
        access_token: response.body["accessToken"]
            .as_str()
            .expect("accessToken in body")
            .to_string(),
        refresh_cookie: refresh_cookie(&response).expect("refresh cookie set"),
    }
}
