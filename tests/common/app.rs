//! In-memory application fixture
//!
//! Builds the full router over a `MemoryStore` and drives it with
//! `tower::ServiceExt::oneshot`, so API tests need no network or database.

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use postboard::backend::server::config::MIN_BCRYPT_COST;
use postboard::backend::server::{app_with_store, ServerConfig};
use postboard::backend::store::MemoryStore;

pub const TEST_ACCESS_SECRET: &str = "test-access-secret";
pub const TEST_REFRESH_SECRET: &str = "test-refresh-secret";

/// Configuration with distinct test secrets and the cheapest bcrypt cost
pub fn test_config() -> ServerConfig {
    ServerConfig::builder()
        .access_secret(TEST_ACCESS_SECRET)
        .refresh_secret(TEST_REFRESH_SECRET)
        .bcrypt_cost(MIN_BCRYPT_COST)
        .build()
        .expect("test config is valid")
}

/// A fresh application with an empty in-memory store
pub fn test_app() -> Router {
    app_with_store(test_config(), MemoryStore::new())
}

/// A response with its body decoded as JSON (`Null` when the body is empty or not JSON)
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// All `Set-Cookie` header values
    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect()
    }
}

/// Request builder with optional JSON body, bearer token and cookie
pub struct TestRequest {
    method: Method,
    uri: String,
    body: Option<Value>,
    bearer: Option<String>,
    cookie: Option<String>,
}

impl TestRequest {
    pub fn new(method: Method, uri: &str) -> Self {
        Self {
            method,
            uri: uri.to_string(),
            body: None,
            bearer: None,
            cookie: None,
        }
    }

    pub fn get(uri: &str) -> Self {
        Self::new(Method::GET, uri)
    }

    pub fn post(uri: &str) -> Self {
        Self::new(Method::POST, uri)
    }

    pub fn put(uri: &str) -> Self {
        Self::new(Method::PUT, uri)
    }

    pub fn delete(uri: &str) -> Self {
        Self::new(Method::DELETE, uri)
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_string());
        self
    }

    /// Raw `Cookie` header value, e.g. `refresh-token=...`
    pub fn cookie(mut self, cookie: &str) -> Self {
        self.cookie = Some(cookie.to_string());
        self
    }

    fn build(self) -> Request<Body> {
        let mut builder = Request::builder().method(self.method).uri(self.uri);

        if let Some(token) = &self.bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let body = match self.body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        builder.body(body).expect("test request is valid")
    }

    /// Send the request through `app`
    pub async fn send(self, app: &Router) -> TestResponse {
        send(app, self.build()).await
    }
}

/// Drive a raw request through a clone of `app`
pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body is readable");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    TestResponse {
        status,
        headers,
        body,
    }
}
