use axum::Json;
use serde::Serialize;

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    /// Status indicator (always "ok")
    pub status: String,
}

/// GET /health
///
/// Used by load balancers. Does not touch the session.
///
/// # Example
/// ```bash
/// curl http://localhost:5000/health
/// # Returns: {"status":"ok"}
/// ```
pub async fn health_check() -> Json<HealthCheckResponse> {
    tracing::debug!("Health check requested");
    Json(HealthCheckResponse {
        status: "ok".to_string(),
    })
}
