//! Health endpoint for orchestration and load balancers.
//!
//! ```text
//! GET /health
//! ```
//!
//! The service has no external dependencies, so health is a static
//! report rather than a readiness probe.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Name reported by the health endpoint.
pub const SERVICE_NAME: &str = "items-api";

/// Health payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Coarse health state.
    #[schema(example = "healthy")]
    pub status: String,
    /// Service identifier.
    #[schema(example = "items-api")]
    pub service: String,
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tags = ["health"],
    operation_id = "healthCheck"
)]
#[get("/health")]
pub async fn health() -> web::Json<HealthResponse> {
    web::Json(HealthResponse {
        status: "healthy".to_owned(),
        service: SERVICE_NAME.to_owned(),
    })
}
