//! Health check handler.

use axum::extract::State;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
///
/// Reports `"degraded"` when the image storage root is missing.
pub async fn health(State(state): State<AppState>) -> ApiResponse<HealthResponse> {
    let storage_ok = match state.storage.health_check().await {
        Ok(ok) => ok,
        Err(e) => {
            tracing::warn!(error = %e, "Storage health check failed");
            false
        }
    };

    ApiResponse::ok(HealthResponse {
        status: if storage_ok { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
