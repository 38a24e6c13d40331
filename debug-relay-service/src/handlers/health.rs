use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::services::get_metrics;
use crate::startup::AppState;
use service_core::error::AppError;

/// Liveness endpoint for Docker/K8s.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "debug-relay-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness: 503 until the provider can take requests.
pub async fn readiness_check(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.provider.health_check().await.map_err(|e| {
        tracing::warn!(error = %e, "Provider not ready");
        AppError::ServiceUnavailable
    })?;

    Ok(StatusCode::OK)
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4")],
        get_metrics(),
    )
}
