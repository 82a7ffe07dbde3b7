/**
 * Router Configuration
 *
 * Combines the user and post routes into a single router, adds request
 * tracing and installs the JSON 404 and 405 fallbacks.
 */

use axum::{response::IntoResponse, Router};
use tower_http::trace::TraceLayer;

use crate::backend::error::{BackendError, NOT_FOUND_MESSAGE};
use crate::backend::routes::post_routes::configure_post_routes;
use crate::backend::routes::user_routes::configure_user_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();
    let router = configure_user_routes(router);
    let router = configure_post_routes(router, app_state.access_gate.clone());

    router
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn not_found() -> impl IntoResponse {
    BackendError::not_found(NOT_FOUND_MESSAGE)
}

async fn method_not_allowed() -> impl IntoResponse {
    BackendError::MethodNotAllowed
}
