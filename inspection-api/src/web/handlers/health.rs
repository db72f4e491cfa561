//! Liveness endpoint

use axum::Json;
use shared::{HealthResponse, service_info};

/// Health check - `GET /`
pub async fn health_check() -> Json<HealthResponse> {
    service_info!("Health check received");
    Json(HealthResponse::running())
}
