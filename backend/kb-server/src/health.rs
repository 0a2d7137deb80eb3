use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Service status with store counts
pub async fn health_check(State(state): State<AppState>) -> Response {
    let store = match state.services.boards.list_boards().await {
        Ok(boards) => json!({ "status": "operational", "boards": boards.len() }),
        Err(e) => json!({ "status": "degraded", "error": e.message() }),
    };

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": { "store": store },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe. The store is in memory, so a running
/// server is ready.
pub async fn readiness_check() -> Response {
    (StatusCode::OK, "Ready").into_response()
}
