//! Per-request identity resolution.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::SignedCookieJar;

use crate::error::WebError;
use crate::extractors::CurrentUser;
use crate::session::SessionJar;
use crate::state::AppState;

/// Resolves the session-carried identity once per incoming request,
/// before any route-specific logic.
///
/// A session id that no longer resolves to a user is treated as
/// anonymous rather than a hard failure.
pub async fn resolve_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let jar = SignedCookieJar::from_headers(request.headers(), state.cookie_key.clone());
    let session = SessionJar::new(jar, &state.config.session);

    let current = match session.current() {
        None => CurrentUser(None),
        Some(user_id) => match state.auth_service.resolve(user_id).await {
            Ok(user) => CurrentUser(user),
            Err(e) => return WebError(e).into_response(),
        },
    };

    request.extensions_mut().insert(current);
    next.run(request).await
}
