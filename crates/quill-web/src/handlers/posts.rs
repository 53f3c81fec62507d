//! Post listing, submission, and random sampling handlers.

use axum::Form;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::SignedCookieJar;

use crate::error::WebError;
use crate::extractors::CurrentUser;
use crate::flash::{set_flash, take_flash};
use crate::forms::{RandomViewParams, SubmitForm, ViewForm};
use crate::pages;
use crate::state::AppState;

/// GET / — all posts, oldest first.
pub async fn index(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Html<String>), WebError> {
    let posts = state.post_repo.list_all().await?;
    let (flash, jar) = take_flash(jar, &state.config.session);
    Ok((
        jar,
        Html(pages::index_page(&posts, user.as_ref(), flash.as_deref())),
    ))
}

/// GET /submit
pub async fn submit_form(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Html<String>) {
    let (flash, jar) = take_flash(jar, &state.config.session);
    (jar, Html(pages::submit_page(user.as_ref(), flash.as_deref())))
}

/// POST /submit
///
/// A blank message is flashed; a blank author is stored as-is. Either
/// way the caller lands back on the post listing.
pub async fn submit(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<SubmitForm>,
) -> Result<(SignedCookieJar, Redirect), WebError> {
    let author = form.author.unwrap_or_default();
    let message = form.message.unwrap_or_default();

    if message.is_empty() {
        let jar = set_flash(jar, &state.config.session, "Message is required.");
        return Ok((jar, Redirect::to("/")));
    }

    state.post_repo.create(&author, &message).await?;
    Ok((jar, Redirect::to("/")))
}

/// GET /view — prompts for a sample size.
pub async fn view_form(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Html<String>) {
    let (flash, jar) = take_flash(jar, &state.config.session);
    (jar, Html(pages::view_page(user.as_ref(), flash.as_deref())))
}

/// POST /view — forwards the requested count to /randomview.
pub async fn view(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<ViewForm>,
) -> (SignedCookieJar, Redirect) {
    let num = form.num.unwrap_or_default();

    if num.is_empty() {
        let jar = set_flash(jar, &state.config.session, "Number is required.");
        return (jar, Redirect::to("/view"));
    }

    // Re-encoded as an integer so the value is safe in the redirect URI.
    let n = match num.parse::<i64>() {
        Ok(n) if n > 0 => n,
        _ => {
            let jar = set_flash(jar, &state.config.session, "Number must be a positive integer.");
            return (jar, Redirect::to("/view"));
        }
    };

    (jar, Redirect::to(&format!("/randomview?num_messages={n}")))
}

/// GET /randomview?num_messages=n — up to `n` uniformly sampled posts.
///
/// A missing or non-positive count is a user-input error, flashed back
/// on the /view form.
pub async fn randomview(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    jar: SignedCookieJar,
    Query(params): Query<RandomViewParams>,
) -> Result<Response, WebError> {
    let raw = params.num_messages.unwrap_or_default();

    if raw.is_empty() {
        let jar = set_flash(jar, &state.config.session, "Number is required.");
        return Ok((jar, Redirect::to("/view")).into_response());
    }

    let Ok(n) = raw.parse::<i64>() else {
        let jar = set_flash(jar, &state.config.session, "Number must be a positive integer.");
        return Ok((jar, Redirect::to("/view")).into_response());
    };
    if n <= 0 {
        let jar = set_flash(jar, &state.config.session, "Number must be a positive integer.");
        return Ok((jar, Redirect::to("/view")).into_response());
    }

    let posts = state.post_repo.sample(n).await?;
    let (flash, jar) = take_flash(jar, &state.config.session);
    Ok((
        jar,
        Html(pages::randomview_page(&posts, user.as_ref(), flash.as_deref())),
    )
        .into_response())
}
