//! Maps domain `AppError` to HTTP responses.
//!
//! Validation, conflict, and authentication errors are normally recovered
//! on the originating form before reaching this mapping; anything that
//! falls through (storage faults, configuration problems) is surfaced as
//! an HTTP error response here.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use quill_core::error::{AppError, ErrorKind};

use crate::pages;

/// Newtype around [`AppError`] carrying the HTTP mapping.
#[derive(Debug)]
pub struct WebError(pub AppError);

impl From<AppError> for WebError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = match self.0.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Authentication | ErrorKind::Session => StatusCode::UNAUTHORIZED,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Database | ErrorKind::Configuration | ErrorKind::Internal => {
                tracing::error!(error = %self.0, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
            Html(pages::error_page("Something went wrong."))
        } else {
            Html(pages::error_page(&self.0.message))
        };

        (status, body).into_response()
    }
}
