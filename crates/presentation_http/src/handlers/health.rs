//! Speech provider health handler

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::state::AppState;

/// Provider health response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" or "unhealthy"
    pub status: String,
    /// Name of the active provider
    pub provider: String,
    /// When the probe ran (RFC 3339)
    pub timestamp: String,
}

/// Ping the active speech provider
///
/// Probe failures surface as an "unhealthy" body with a 503 rather than an
/// error response; this endpoint never fails outright.
#[instrument(skip(state))]
pub async fn speech_health(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let healthy = state.narration.is_healthy().await;

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(HealthResponse {
            status: if healthy { "healthy" } else { "unhealthy" }.to_string(),
            provider: state.narration.provider_name().to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }),
    )
}
