//! Signed-cookie session management.
//!
//! The server-side session holds at most one field: the logged-in user's
//! id. It is carried in a signed cookie whose lifetime is bounded by the
//! browser session; a tampered or unsigned cookie fails verification and
//! reads as absent.

use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::{Cookie, Key};

use quill_core::config::session::SessionConfig;
use quill_core::error::AppError;

/// Minimum length for a configured cookie-signing secret.
const MIN_SECRET_LEN: usize = 32;

/// Wrapper over [`SignedCookieJar`] implementing the session contract:
/// `start`, `current`, `end`.
#[derive(Debug)]
pub struct SessionJar {
    jar: SignedCookieJar,
    cookie_name: String,
}

impl SessionJar {
    /// Wraps a verified cookie jar.
    pub fn new(jar: SignedCookieJar, config: &SessionConfig) -> Self {
        Self {
            jar,
            cookie_name: config.cookie_name.clone(),
        }
    }

    /// Clears any prior session state, then stores the new identity id.
    pub fn start(self, user_id: i64) -> Self {
        let cleared = self.end();
        let cookie = Cookie::build((cleared.cookie_name.clone(), user_id.to_string()))
            .path("/")
            .http_only(true)
            .build();

        Self {
            jar: cleared.jar.add(cookie),
            cookie_name: cleared.cookie_name,
        }
    }

    /// Returns the stored identity id, if any.
    ///
    /// A cookie value that does not parse as an id is treated as absent.
    pub fn current(&self) -> Option<i64> {
        self.jar
            .get(&self.cookie_name)
            .and_then(|cookie| cookie.value().parse::<i64>().ok())
    }

    /// Clears all session state.
    pub fn end(self) -> Self {
        let removal = Cookie::build(self.cookie_name.clone()).path("/").build();
        Self {
            jar: self.jar.remove(removal),
            cookie_name: self.cookie_name,
        }
    }

    /// Unwraps into the underlying jar for inclusion in a response.
    pub fn into_jar(self) -> SignedCookieJar {
        self.jar
    }
}

/// Derive the cookie signing key from configuration.
///
/// An empty secret generates a random key at startup; existing sessions
/// are then invalidated by a restart.
pub fn cookie_key(config: &SessionConfig) -> Result<Key, AppError> {
    if config.secret.is_empty() {
        return Ok(Key::generate());
    }

    if config.secret.len() < MIN_SECRET_LEN {
        return Err(AppError::configuration(format!(
            "Session secret must be at least {MIN_SECRET_LEN} bytes"
        )));
    }

    Ok(Key::derive_from(config.secret.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SessionConfig {
        SessionConfig::default()
    }

    fn empty_jar() -> SignedCookieJar {
        SignedCookieJar::new(Key::generate())
    }

    #[test]
    fn test_start_then_current() {
        let session = SessionJar::new(empty_jar(), &test_config()).start(7);
        assert_eq!(session.current(), Some(7));
    }

    #[test]
    fn test_start_replaces_prior_identity() {
        let session = SessionJar::new(empty_jar(), &test_config()).start(7).start(9);
        assert_eq!(session.current(), Some(9));
    }

    #[test]
    fn test_end_clears_state() {
        let session = SessionJar::new(empty_jar(), &test_config()).start(7).end();
        assert_eq!(session.current(), None);
    }

    #[test]
    fn test_empty_jar_is_anonymous() {
        let session = SessionJar::new(empty_jar(), &test_config());
        assert_eq!(session.current(), None);
    }

    #[test]
    fn test_cookie_key_rejects_short_secret() {
        let config = SessionConfig {
            secret: "short".to_string(),
            ..SessionConfig::default()
        };
        assert!(cookie_key(&config).is_err());

        let config = SessionConfig {
            secret: "0123456789abcdef0123456789abcdef".to_string(),
            ..SessionConfig::default()
        };
        assert!(cookie_key(&config).is_ok());
    }
}
