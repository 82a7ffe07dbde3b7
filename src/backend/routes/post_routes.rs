/**
 * Post Routes
 *
 * The access gate is attached per method with `route_layer`, so
 * `GET /post/{id}` stays public while `DELETE /post/{id}` on the same path
 * requires a bearer token. Creation is reachable both as `/post` and
 * `/post/`.
 */

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::backend::middleware::{auth_middleware, AccessGate};
use crate::backend::posts::{create_post, delete_post, feed, get_post, publish_post};
use crate::backend::server::state::AppState;

pub fn configure_post_routes(router: Router<AppState>, gate: AccessGate) -> Router<AppState> {
    let auth = middleware::from_fn_with_state(gate, auth_middleware);

    router
        .route("/post/feed", get(feed).route_layer(auth.clone()))
        .route("/post", post(create_post).route_layer(auth.clone()))
        .route("/post/", post(create_post).route_layer(auth.clone()))
        .route(
            "/post/publish/{id}",
            put(publish_post).route_layer(auth.clone()),
        )
        .route(
            "/post/{id}",
            get(get_post).merge(delete(delete_post).route_layer(auth)),
        )
}
