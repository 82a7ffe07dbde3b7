//! Integration tests for the `/post` endpoints

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use postboard::backend::auth::tokens::{self, ACCESS_TOKEN_TTL_SECS};
use postboard::backend::auth::TokenUser;

use crate::assert_error_response;
use crate::common::*;

async fn create_post(app: &axum::Router, user: &TestUser, title: &str) -> i64 {
    let response = TestRequest::post("/post/")
        .bearer(&user.access_token)
        .json(json!({ "title": title, "content": "body" }))
        .send(app)
        .await;
    assert_eq!(response.status, StatusCode::OK, "create failed: {}", response.body);
    response.body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = test_app();

    let requests = [
        TestRequest::get("/post/feed"),
        TestRequest::post("/post/").json(json!({ "title": "x" })),
        TestRequest::put("/post/publish/1"),
        TestRequest::delete("/post/1"),
    ];

    for request in requests {
        let response = request.send(&app).await;
        assert_error_response!(response, StatusCode::UNAUTHORIZED, "Missing authorization header");
    }
}

#[tokio::test]
async fn test_invalid_bearer_token() {
    let app = test_app();

    let response = TestRequest::get("/post/feed")
        .bearer("not-a-token")
        .send(&app)
        .await;

    assert_error_response!(response, StatusCode::UNAUTHORIZED, "Invalid or expired token");
}

#[tokio::test]
async fn test_create_post() {
    let app = test_app();
    let user = create_test_user(&app, "author@example.com").await;

    let response = TestRequest::post("/post/")
        .bearer(&user.access_token)
        .json(json!({ "title": "Hello", "content": "First post" }))
        .send(&app)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "Hello");
    assert_eq!(response.body["content"], "First post");
    assert_eq!(response.body["published"], false);
    assert!(response.body["authorId"].is_i64());
    assert!(response.body["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_post_for_unknown_author_hides_store_detail() {
    let app = test_app();
    let ghost = TokenUser {
        id: 999,
        email: "ghost@example.com".to_string(),
    };
    let token = tokens::issue(&ghost, TEST_ACCESS_SECRET, ACCESS_TOKEN_TTL_SECS).unwrap();

    let response = TestRequest::post("/post/")
        .bearer(&token)
        .json(json!({ "title": "Orphan" }))
        .send(&app)
        .await;

    assert_error_response!(response, StatusCode::NOT_FOUND, "Not Found");
}

#[tokio::test]
async fn test_create_post_without_trailing_slash() {
    let app = test_app();
    let user = create_test_user(&app, "author@example.com").await;

    let response = TestRequest::post("/post")
        .bearer(&user.access_token)
        .json(json!({ "title": "No slash" }))
        .send(&app)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["content"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_create_post_requires_title() {
    let app = test_app();
    let user = create_test_user(&app, "author@example.com").await;

    let response = TestRequest::post("/post/")
        .bearer(&user.access_token)
        .json(json!({ "title": "   " }))
        .send(&app)
        .await;
    assert_error_response!(response, StatusCode::BAD_REQUEST, "Title is required");

    let response = TestRequest::post("/post/")
        .bearer(&user.access_token)
        .json(json!({ "content": "no title" }))
        .send(&app)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_post_is_public() {
    let app = test_app();
    let user = create_test_user(&app, "author@example.com").await;
    let id = create_post(&app, &user, "Draft").await;

    let response = TestRequest::get(&format!("/post/{}", id)).send(&app).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id);
    assert_eq!(response.body["published"], false);
}

#[tokio::test]
async fn test_get_missing_post_is_200_with_message() {
    let app = test_app();

    let response = TestRequest::get("/post/999").send(&app).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "message": "Post not found" }));
}

#[tokio::test]
async fn test_invalid_post_id() {
    let app = test_app();
    let user = create_test_user(&app, "author@example.com").await;

    let response = TestRequest::get("/post/abc").send(&app).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = TestRequest::put("/post/publish/-3")
        .bearer(&user.access_token)
        .send(&app)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_publish_and_feed() {
    let app = test_app();
    let user = create_test_user(&app, "author@example.com").await;
    let first = create_post(&app, &user, "First").await;
    let second = create_post(&app, &user, "Second").await;
    let _draft = create_post(&app, &user, "Draft").await;

    for id in [second, first] {
        let response = TestRequest::put(&format!("/post/publish/{}", id))
            .bearer(&user.access_token)
            .send(&app)
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["published"], true);
    }

    let response = TestRequest::get("/post/feed")
        .bearer(&user.access_token)
        .send(&app)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let feed = response.body.as_array().unwrap();
    let ids: Vec<i64> = feed.iter().map(|p| p["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![first, second]);
    assert_eq!(
        feed[0]["author"],
        json!({ "email": "author@example.com", "name": "Test User" })
    );
}

#[tokio::test]
async fn test_feed_is_scoped_to_caller() {
    let app = test_app();
    let alice = create_test_user(&app, "alice@example.com").await;
    let bob = create_test_user(&app, "bob@example.com").await;

    let id = create_post(&app, &alice, "Alice's post").await;
    TestRequest::put(&format!("/post/publish/{}", id))
        .bearer(&alice.access_token)
        .send(&app)
        .await;

    let response = TestRequest::get("/post/feed")
        .bearer(&bob.access_token)
        .send(&app)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_cannot_touch_other_users_posts() {
    let app = test_app();
    let alice = create_test_user(&app, "alice@example.com").await;
    let bob = create_test_user(&app, "bob@example.com").await;
    let id = create_post(&app, &alice, "Alice's post").await;

    let response = TestRequest::put(&format!("/post/publish/{}", id))
        .bearer(&bob.access_token)
        .send(&app)
        .await;
    assert_error_response!(response, StatusCode::NOT_FOUND, "Post not found");

    let response = TestRequest::delete(&format!("/post/{}", id))
        .bearer(&bob.access_token)
        .send(&app)
        .await;
    assert_error_response!(response, StatusCode::NOT_FOUND, "Post not found");

    // Still there and still a draft
    let response = TestRequest::get(&format!("/post/{}", id)).send(&app).await;
    assert_eq!(response.body["published"], false);
}

#[tokio::test]
async fn test_delete_post() {
    let app = test_app();
    let user = create_test_user(&app, "author@example.com").await;
    let id = create_post(&app, &user, "Short-lived").await;

    let response = TestRequest::delete(&format!("/post/{}", id))
        .bearer(&user.access_token)
        .send(&app)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id);

    let response = TestRequest::get(&format!("/post/{}", id)).send(&app).await;
    assert_eq!(response.body, json!({ "message": "Post not found" }));

    let response = TestRequest::delete(&format!("/post/{}", id))
        .bearer(&user.access_token)
        .send(&app)
        .await;
    assert_error_response!(response, StatusCode::NOT_FOUND, "Post not found");
}
