//! Health check endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::ApiState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Whether the option catalog could be read from storage
    pub storage: bool,
    pub timestamp: String,
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service status", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<Arc<ApiState>>) -> Json<HealthResponse> {
    let storage = match state.forms.list_field_options().await {
        Ok(_) => true,
        Err(err) => {
            tracing::warn!(error = %err, "storage probe failed");
            false
        }
    };

    Json(HealthResponse {
        status: if storage { "healthy" } else { "degraded" }.into(),
        version: state.version.clone(),
        storage,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
