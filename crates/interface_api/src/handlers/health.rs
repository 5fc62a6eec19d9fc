//! Health check handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use core_kernel::AdapterHealth;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<AdapterHealth>,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.config.version.clone(),
        store: None,
    })
}

/// Readiness check (includes the customer store)
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let result = state.service.store().health_check().await;

    let (code, status) = if result.status.is_operational() {
        (StatusCode::OK, "ready")
    } else {
        tracing::warn!(
            adapter = %result.adapter_id,
            message = ?result.message,
            "Customer store not ready"
        );
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            version: state.config.version.clone(),
            store: Some(result.status),
        }),
    )
}
