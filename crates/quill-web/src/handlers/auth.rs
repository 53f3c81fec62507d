//! Registration, login, and logout handlers.
//!
//! Validation, conflict, and authentication failures are recovered
//! locally: the message is flashed and the caller is redirected back to
//! the originating form. Anything else propagates as a [`WebError`].

use axum::Form;
use axum::extract::State;
use axum::response::{Html, Redirect};
use axum_extra::extract::SignedCookieJar;

use crate::error::WebError;
use crate::extractors::CurrentUser;
use crate::flash::{set_flash, take_flash};
use crate::forms::{LoginForm, RegisterForm};
use crate::pages;
use crate::session::SessionJar;
use crate::state::AppState;

/// GET /auth/register
pub async fn register_form(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Html<String>) {
    let (flash, jar) = take_flash(jar, &state.config.session);
    (jar, Html(pages::register_page(user.as_ref(), flash.as_deref())))
}

/// POST /auth/register
///
/// Success redirects to the login entry point; the caller is not
/// authenticated by registering.
pub async fn register(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<RegisterForm>,
) -> Result<(SignedCookieJar, Redirect), WebError> {
    let username = form.username.unwrap_or_default();
    let password = form.password.unwrap_or_default();

    match state.auth_service.register(&username, &password).await {
        Ok(_) => Ok((jar, Redirect::to("/auth/login"))),
        Err(err) if err.is_user_facing() => {
            let jar = set_flash(jar, &state.config.session, &err.message);
            Ok((jar, Redirect::to("/auth/register")))
        }
        Err(err) => Err(WebError(err)),
    }
}

/// GET /auth/login
pub async fn login_form(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Html<String>) {
    let (flash, jar) = take_flash(jar, &state.config.session);
    (jar, Html(pages::login_page(user.as_ref(), flash.as_deref())))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<LoginForm>,
) -> Result<(SignedCookieJar, Redirect), WebError> {
    let username = form.username.unwrap_or_default();
    let password = form.password.unwrap_or_default();

    match state.auth_service.login(&username, &password).await {
        Ok(user) => {
            let session = SessionJar::new(jar, &state.config.session).start(user.id);
            Ok((session.into_jar(), Redirect::to("/")))
        }
        Err(err) if err.is_user_facing() => {
            let jar = set_flash(jar, &state.config.session, &err.message);
            Ok((jar, Redirect::to("/auth/login")))
        }
        Err(err) => Err(WebError(err)),
    }
}

/// GET /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Redirect) {
    let session = SessionJar::new(jar, &state.config.session).end();
    (session.into_jar(), Redirect::to("/"))
}
