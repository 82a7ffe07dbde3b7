//! Database test fixtures and utilities
//!
//! Postgres-backed tests are `#[ignore]`d and read `DATABASE_URL`; run them
//! with `cargo test -- --ignored` against a disposable database.

use postboard::backend::store::PgStore;

/// Connect to the test database and apply migrations
pub async fn create_test_store() -> PgStore {
    dotenv::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must point at a disposable test database");

    let store = PgStore::connect(&database_url)
        .await
        .expect("Failed to connect to test database");
    store.migrate().await.expect("Failed to run migrations");
    store
}

/// Remove all rows while preserving the schema
pub async fn cleanup_test_data(store: &PgStore) -> Result<(), sqlx::Error> {
    sqlx::query("TRUNCATE TABLE posts, users RESTART IDENTITY CASCADE")
        .execute(store.pool())
        .await?;
    Ok(())
}
