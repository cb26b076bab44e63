//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (bundle is present)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::routing::ViewKind;
use crate::server::dto::HealthResponse;
use crate::server::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once the frontend bundle can be served.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.bundle_ready().await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (status, bundle) = if state.bundle_ready().await {
        ("healthy", "ok")
    } else {
        ("degraded", "missing")
    };

    Json(HealthResponse {
        status: status.to_string(),
        bundle: bundle.to_string(),
        routes: ViewKind::ALL.iter().map(|v| v.path().to_string()).collect(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
