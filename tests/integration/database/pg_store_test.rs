//! Postgres repository tests
//!
//! Ignored by default; they need `DATABASE_URL` pointing at a disposable
//! database because they truncate both tables.

use assert_matches::assert_matches;
use serial_test::serial;

use postboard::backend::auth::{NewUser, UserRepository};
use postboard::backend::posts::{NewPost, PostRepository};
use postboard::backend::store::RepositoryError;

use crate::common::*;

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        name: Some("Pg".to_string()),
        password_hash: "$2b$04$not-a-real-hash".to_string(),
    }
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_unique_email() {
    let store = create_test_store().await;
    cleanup_test_data(&store).await.unwrap();

    UserRepository::create(&store, new_user("pg@example.com")).await.unwrap();
    let result = UserRepository::create(&store, new_user("pg@example.com")).await;

    assert_matches!(result, Err(RepositoryError::Conflict(_)));
    let found = store.find_by_email("pg@example.com").await.unwrap();
    assert_eq!(found.map(|u| u.email).as_deref(), Some("pg@example.com"));
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_owner_scoped_writes() {
    let store = create_test_store().await;
    cleanup_test_data(&store).await.unwrap();

    let owner = UserRepository::create(&store, new_user("owner@example.com")).await.unwrap();
    let other = UserRepository::create(&store, new_user("other@example.com")).await.unwrap();

    let post = PostRepository::create(
        &store,
        owner.id,
        NewPost {
            title: "Pg post".to_string(),
            content: None,
        },
    )
    .await
    .unwrap();
    assert!(!post.published);

    assert_matches!(
        store.publish(post.id, other.id).await,
        Err(RepositoryError::NotFound(_))
    );
    assert_matches!(
        store.delete(post.id, other.id).await,
        Err(RepositoryError::NotFound(_))
    );

    let published = store.publish(post.id, owner.id).await.unwrap();
    assert!(published.published);

    let feed = store.list_published_by_author(owner.id).await.unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].author.email, "owner@example.com");
    assert!(store.list_published_by_author(other.id).await.unwrap().is_empty());

    store.delete(post.id, owner.id).await.unwrap();
    assert_eq!(store.find_by_id(post.id).await.unwrap(), None);
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_post_requires_existing_author() {
    let store = create_test_store().await;
    cleanup_test_data(&store).await.unwrap();

    let result = PostRepository::create(
        &store,
        424242,
        NewPost {
            title: "Orphan".to_string(),
            content: None,
        },
    )
    .await;

    assert_matches!(result, Err(RepositoryError::NotFound(_)));
}
