//! Router-level behavior: fallback and method handling

use axum::http::StatusCode;

use crate::assert_error_response;
use crate::common::*;

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = test_app();

    for uri in ["/", "/nope", "/user/me", "/post/feed/extra"] {
        let response = TestRequest::get(uri).send(&app).await;
        assert_error_response!(response, StatusCode::NOT_FOUND, "Not Found");
    }
}

#[tokio::test]
async fn test_wrong_method_is_json_405() {
    let app = test_app();

    let response = TestRequest::get("/user/sign-in").send(&app).await;
    assert_error_response!(response, StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");

    let response = TestRequest::get("/post/publish/1").send(&app).await;
    assert_error_response!(response, StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");

    // Answered before the access gate runs, so no token is needed to see it
    let response = TestRequest::put("/post/1").send(&app).await;
    assert_error_response!(response, StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
}
