//! One-shot flash messages carried in a signed cookie.
//!
//! A flash message is set alongside a redirect and consumed (read and
//! removed) by the next page render.

use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::Cookie;

use quill_core::config::session::SessionConfig;

/// Stores a one-shot message for the next rendered page.
pub fn set_flash(jar: SignedCookieJar, config: &SessionConfig, message: &str) -> SignedCookieJar {
    let cookie = Cookie::build((config.flash_cookie_name.clone(), message.to_string()))
        .path("/")
        .http_only(true)
        .build();
    jar.add(cookie)
}

/// Consumes the pending flash message, if any.
///
/// The message is removed from the jar so it renders exactly once.
pub fn take_flash(jar: SignedCookieJar, config: &SessionConfig) -> (Option<String>, SignedCookieJar) {
    match jar.get(&config.flash_cookie_name) {
        Some(cookie) => {
            let message = cookie.value().to_string();
            let removal = Cookie::build(config.flash_cookie_name.clone())
                .path("/")
                .build();
            (Some(message), jar.remove(removal))
        }
        None => (None, jar),
    }
}
