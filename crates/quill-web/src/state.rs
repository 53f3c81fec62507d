//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sqlx::SqlitePool;

use quill_auth::password::PasswordHasher;
use quill_auth::service::AuthService;
use quill_core::config::AppConfig;
use quill_database::repositories::post::PostRepository;
use quill_database::repositories::user::UserRepository;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// SQLite connection pool
    pub db_pool: SqlitePool,
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Post repository
    pub post_repo: Arc<PostRepository>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,
    /// Register/login credential flow
    pub auth_service: Arc<AuthService>,
    /// Cookie signing key for sessions and flash messages
    pub cookie_key: Key,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish()
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}
