//! `CurrentUser` extractor — the per-request resolved identity.
//!
//! Populated by the identity-resolution middleware before any
//! route-specific logic runs; handlers that personalize output extract it
//! without touching the session cookie themselves.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use quill_entity::user::User;

/// The identity resolved for this request: `None` means anonymous.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<User>);

impl CurrentUser {
    /// Whether the request carries an authenticated identity.
    pub fn is_authenticated(&self) -> bool {
        self.0.is_some()
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Absent extension means the resolution middleware did not run
        // for this route; treat as anonymous rather than failing.
        Ok(parts
            .extensions
            .get::<Self>()
            .cloned()
            .unwrap_or(Self(None)))
    }
}
