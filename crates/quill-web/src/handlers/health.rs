//! Health check endpoint.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use quill_database::connection::health_check;

use crate::error::WebError;
use crate::state::AppState;

/// GET /health — liveness plus a database round trip.
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, WebError> {
    let db_ok = health_check(&state.db_pool).await?;
    Ok(Json(json!({
        "status": "ok",
        "database": if db_ok { "up" } else { "down" },
    })))
}
