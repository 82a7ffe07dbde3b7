/**
 * Application State Management
 *
 * `AppState` is the single state value handed to the router. The `FromRef`
 * implementations let handlers extract only the part they use:
 *
 * - `State<AuthService>` for the `/user` handlers
 * - `State<PostStore>` for the `/post` handlers
 * - `State<AccessGate>` for the auth middleware
 *
 * Every field is cheap to clone (`Arc`-backed), and nothing in here is
 * mutable after startup; the stores do their own locking.
 */

use axum::extract::FromRef;

use crate::backend::auth::service::AuthService;
use crate::backend::middleware::AccessGate;
use crate::backend::posts::PostStore;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Sign-up, sign-in and refresh
    pub auth: AuthService,

    /// Access token verification for protected routes
    pub access_gate: AccessGate,

    /// Post persistence
    pub posts: PostStore,
}

impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

impl FromRef<AppState> for AccessGate {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.access_gate.clone()
    }
}

impl FromRef<AppState> for PostStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.posts.clone()
    }
}
