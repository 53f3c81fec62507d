//! Route table and middleware composition.

use axum::Router;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::handlers::{auth, health, posts};
use crate::middleware::auth::require_login;
use crate::middleware::identity::resolve_identity;
use crate::middleware::logging::request_logging;
use crate::state::AppState;

/// Builds the application router.
///
/// Identity resolution runs on every request before route-specific
/// logic; the login gate is composed only onto the submission routes.
pub fn build_router(state: AppState) -> Router {
    let gated = Router::new()
        .route("/submit", get(posts::submit_form).post(posts::submit))
        .route_layer(from_fn(require_login));

    Router::new()
        .route("/", get(posts::index))
        .route("/view", get(posts::view_form).post(posts::view))
        .route("/randomview", get(posts::randomview).post(posts::randomview))
        .route("/auth/register", get(auth::register_form).post(auth::register))
        .route("/auth/login", get(auth::login_form).post(auth::login))
        .route("/auth/logout", get(auth::logout))
        .route("/health", get(health::health))
        .merge(gated)
        .layer(from_fn(request_logging))
        .layer(from_fn_with_state(state.clone(), resolve_identity))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
