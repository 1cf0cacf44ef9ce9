use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe, checks the inquiry store
pub async fn ready(State(app): State<AppState>) -> impl IntoResponse {
    let storage = app.command.backend();

    match app.command.ping().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({"status": "ready", "storage": storage})),
        ),
        Err(e) => {
            tracing::error!(storage, "Readiness check failed: storage unavailable - {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not_ready",
                    "reason": "storage_unavailable"
                })),
            )
        }
    }
}
