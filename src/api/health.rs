//! Root greeting and health probes

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::types::MessageResponse;

/// Health check body
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// GET /
pub async fn index() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello, world!"))
}

/// GET /health - liveness with version info
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// GET /live - bare liveness probe
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

/// GET /ready - readiness probe; verifies the user store answers
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.user_service.list(1, 0).await {
        Ok(_) => {
            let response = HealthResponse {
                status: HealthStatus::Healthy,
                version: env!("CARGO_PKG_VERSION").to_string(),
            };
            (StatusCode::OK, Json(response))
        }
        Err(_) => {
            let response = HealthResponse {
                status: HealthStatus::Unhealthy,
                version: env!("CARGO_PKG_VERSION").to_string(),
            };
            (StatusCode::SERVICE_UNAVAILABLE, Json(response))
        }
    }
}
