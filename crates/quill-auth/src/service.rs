//! Credential-check flow — registration and login.

use std::sync::Arc;

use tracing::{info, warn};

use quill_core::error::AppError;
use quill_core::result::AppResult;
use quill_database::repositories::user::UserRepository;
use quill_entity::user::User;

use crate::password::PasswordHasher;

/// Orchestrates registration and login against the credential store.
///
/// Session state is not managed here; callers start or end the cookie
/// session after a successful login or on logout.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Credential store.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    password_hasher: Arc<PasswordHasher>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(user_repo: Arc<UserRepository>, password_hasher: Arc<PasswordHasher>) -> Self {
        Self {
            user_repo,
            password_hasher,
        }
    }

    /// Registers a new user.
    ///
    /// Blank fields are rejected before any store access. A duplicate
    /// username fails with a conflict whose message echoes the attempted
    /// username. Registration does not authenticate the caller.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<User> {
        if username.is_empty() {
            return Err(AppError::validation("Username is required."));
        }
        if password.is_empty() {
            return Err(AppError::validation("Password is required."));
        }

        let hash = self.password_hasher.hash_password(password)?;
        let user = self.user_repo.create(username, &hash).await?;

        info!(user_id = user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Verifies credentials and returns the matching user.
    ///
    /// The failure messages distinguish unknown-username from
    /// wrong-password, matching the established user-facing text. This
    /// is a known user-enumeration weakness.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<User> {
        let Some(user) = self.user_repo.find_by_username(username).await? else {
            warn!(username = %username, "Login failed: unknown username");
            return Err(AppError::authentication("Incorrect username."));
        };

        let password_valid = self
            .password_hasher
            .verify_password(password, &user.password_hash)?;

        if !password_valid {
            warn!(user_id = user.id, "Login failed: wrong password");
            return Err(AppError::authentication("Incorrect password."));
        }

        info!(user_id = user.id, username = %user.username, "Login successful");
        Ok(user)
    }

    /// Resolves a session-carried user id to a user.
    ///
    /// An id that no longer resolves degrades silently to `None`
    /// (anonymous), never a hard failure.
    pub async fn resolve(&self, user_id: i64) -> AppResult<Option<User>> {
        self.user_repo.find_by_id(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::config::DatabaseConfig;
    use quill_core::error::ErrorKind;

    async fn test_service() -> AuthService {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            connect_timeout_seconds: 5,
        };
        let pool = quill_database::connection::create_pool(&config)
            .await
            .expect("Failed to open in-memory database");
        quill_database::migration::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        AuthService::new(
            Arc::new(UserRepository::new(pool)),
            Arc::new(PasswordHasher::new()),
        )
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let service = test_service().await;

        service.register("alice", "pw1").await.expect("register failed");
        let user = service.login("alice", "pw1").await.expect("login failed");
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_register_rejects_blank_fields() {
        let service = test_service().await;

        let err = service.register("", "pw1").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Username is required.");

        let err = service.register("alice", "").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Password is required.");
    }

    #[tokio::test]
    async fn test_register_duplicate_echoes_username() {
        let service = test_service().await;

        service.register("alice", "pw1").await.unwrap();
        let err = service.register("alice", "pw2").await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(err.message, "User alice is already registered.");
    }

    #[tokio::test]
    async fn test_login_distinguishes_failure_modes() {
        let service = test_service().await;
        service.register("alice", "pw1").await.unwrap();

        let err = service.login("nobody", "pw1").await.unwrap_err();
        assert_eq!(err.message, "Incorrect username.");

        let err = service.login("alice", "wrong").await.unwrap_err();
        assert_eq!(err.message, "Incorrect password.");
    }

    #[tokio::test]
    async fn test_resolve_missing_id_is_anonymous() {
        let service = test_service().await;

        assert_eq!(service.resolve(999).await.unwrap(), None);
    }
}
