use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::{database, AppState};

pub const CONNECTED: &str = "Hello, World! - Connected to PostgreSQL!";
pub const NOT_CONNECTED: &str = "Hello, World! - Not connected to PostgreSQL!";

/// Connectivity probe: takes a connection and hands it straight back.
pub async fn root(State(state): State<AppState>) -> &'static str {
    match database::acquire(&state.db).await {
        Some(conn) => {
            drop(conn);
            CONNECTED
        }
        None => NOT_CONNECTED,
    }
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match database::check_health(&state.db).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "database": "connected"
            })),
        ),
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unavailable",
                    "database": "disconnected"
                })),
            )
        }
    }
}
