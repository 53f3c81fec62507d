//! # quill-web
//!
//! HTTP layer for Quill built on Axum.
//!
//! Provides the routes, middleware (identity resolution, login gate,
//! request logging), signed-cookie session and flash helpers, form DTOs,
//! HTML page rendering, and error mapping.

pub mod app;
pub mod error;
pub mod extractors;
pub mod flash;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod router;
pub mod session;
pub mod state;

pub use app::{build_state, run_server};
pub use router::build_router;
pub use state::AppState;
