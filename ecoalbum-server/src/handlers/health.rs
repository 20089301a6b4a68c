use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use tracing::warn;

use crate::AppState;

/// API and database health probe.
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.repo.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "database": "connected",
            })),
        ),
        Err(err) => {
            warn!(error = %err, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "database": "unavailable",
                })),
            )
        }
    }
}
