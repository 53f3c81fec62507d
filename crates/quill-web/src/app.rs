//! Server assembly and lifecycle.

use std::sync::Arc;

use sqlx::SqlitePool;
use tracing::info;

use quill_auth::password::PasswordHasher;
use quill_auth::service::AuthService;
use quill_core::config::AppConfig;
use quill_core::result::AppResult;
use quill_database::repositories::post::PostRepository;
use quill_database::repositories::user::UserRepository;

use crate::router::build_router;
use crate::session::cookie_key;
use crate::state::AppState;

/// Wires repositories and services into the shared application state.
pub fn build_state(config: AppConfig, db_pool: SqlitePool) -> AppResult<AppState> {
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let post_repo = Arc::new(PostRepository::new(db_pool.clone()));
    let password_hasher = Arc::new(PasswordHasher::new());
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
    ));
    let key = cookie_key(&config.session)?;

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        user_repo,
        post_repo,
        password_hasher,
        auth_service,
        cookie_key: key,
    })
}

/// Binds the listener and serves until shutdown.
pub async fn run_server(config: AppConfig, db_pool: SqlitePool) -> AppResult<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = build_state(config, db_pool)?;
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
