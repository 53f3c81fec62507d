//! Cookie session configuration.

use serde::{Deserialize, Serialize};

/// Signed-cookie session configuration.
///
/// The session cookie holds at most one field (the logged-in user id) and
/// its lifetime is bounded by the transport-level session cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Name of the one-shot flash message cookie.
    #[serde(default = "default_flash_cookie_name")]
    pub flash_cookie_name: String,
    /// Secret used to derive the cookie signing key. Must be at least 32
    /// bytes when set. When empty, a random key is generated at startup
    /// and sessions do not survive a restart.
    #[serde(default)]
    pub secret: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            flash_cookie_name: default_flash_cookie_name(),
            secret: String::new(),
        }
    }
}

fn default_cookie_name() -> String {
    "session".to_string()
}

fn default_flash_cookie_name() -> String {
    "flash".to_string()
}
