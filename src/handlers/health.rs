//! Health check handler

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    model_loaded: bool,
    version: &'static str,
    timestamp: i64,
}

/// Reports whether the artifacts loaded; always HTTP 200 so the
/// degraded condition is visible without tripping load balancers.
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let degraded = state.service.is_degraded();

    Json(HealthResponse {
        status: if degraded { "degraded" } else { "healthy" },
        model_loaded: !degraded,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
