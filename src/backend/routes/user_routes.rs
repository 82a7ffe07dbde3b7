/**
 * User Routes
 *
 * - `POST /user/sign-up`
 * - `POST /user/sign-in`
 * - `GET /user/refresh`
 *
 * All public; refresh authenticates through the cookie, not the gate.
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{refresh_token, sign_in, sign_up};
use crate::backend::server::state::AppState;

pub fn configure_user_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/user/sign-up", post(sign_up))
        .route("/user/sign-in", post(sign_in))
        .route("/user/refresh", get(refresh_token))
}
