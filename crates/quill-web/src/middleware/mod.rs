//! Axum middleware stack.

pub mod auth;
pub mod identity;
pub mod logging;
