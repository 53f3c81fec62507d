//! Login gate middleware.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::extractors::CurrentUser;

/// Short-circuits anonymous requests with a redirect to the login entry
/// point instead of invoking the wrapped handler.
///
/// Composed at route-registration time via `route_layer`; it forwards
/// authenticated requests unchanged and never alters the wrapped
/// handler's own contract.
pub async fn require_login(request: Request, next: Next) -> Response {
    let authenticated = request
        .extensions()
        .get::<CurrentUser>()
        .map(CurrentUser::is_authenticated)
        .unwrap_or(false);

    if !authenticated {
        return Redirect::to("/auth/login").into_response();
    }

    next.run(request).await
}
