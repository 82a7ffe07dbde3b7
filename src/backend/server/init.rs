/**
 * Server Initialization
 *
 * Builds the application from a validated `ServerConfig`:
 *
 * 1. Select the store: Postgres when `DATABASE_URL` is set (migrations are
 *    applied before serving), otherwise the in-memory store
 * 2. Build the auth service and access gate from the auth settings
 * 3. Assemble `AppState` and the router
 *
 * Startup fails if the database is configured but unreachable or its
 * migrations fail; there is no silent fallback from a configured database
 * to memory.
 */

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::backend::auth::service::AuthService;
use crate::backend::auth::users::UserRepository;
use crate::backend::middleware::AccessGate;
use crate::backend::posts::{PostRepository, PostStore};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::{MemoryStore, PgStore, RepositoryError};

/// Errors that abort startup
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database connection failed: {0}")]
    Connect(#[source] RepositoryError),

    #[error("database migration failed: {0}")]
    Migrate(#[source] RepositoryError),
}

/// Assemble state around an already-constructed store
///
/// The store must implement both repositories; tests pass a `MemoryStore`.
pub fn build_state<S>(config: ServerConfig, store: S) -> AppState
where
    S: UserRepository + PostRepository + 'static,
{
    let store = Arc::new(store);
    let users: Arc<dyn UserRepository> = store.clone();
    let posts: PostStore = store;

    let auth_config = Arc::new(config.auth);
    let access_gate = AccessGate::new(&auth_config);
    let auth = AuthService::new(users, auth_config);

    AppState {
        auth,
        access_gate,
        posts,
    }
}

/// Router over the given store, without touching the network
pub fn app_with_store<S>(config: ServerConfig, store: S) -> Router
where
    S: UserRepository + PostRepository + 'static,
{
    create_router(build_state(config, store))
}

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns `StartupError` if a configured database cannot be reached or
/// migrated.
pub async fn create_app(config: ServerConfig) -> Result<Router, StartupError> {
    tracing::info!("Initializing blog backend");
    tracing::debug!("Configuration: {:?}", config);

    match config.database_url.clone() {
        Some(url) => {
            let store = PgStore::connect(&url).await.map_err(StartupError::Connect)?;
            store.migrate().await.map_err(StartupError::Migrate)?;
            tracing::info!("Connected to Postgres, migrations applied");
            Ok(app_with_store(config, store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set - using in-memory store, data is lost on restart");
            Ok(app_with_store(config, MemoryStore::new()))
        }
    }
}
