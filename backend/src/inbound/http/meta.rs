//! Service metadata handler.
//!
//! ```text
//! GET /
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Welcome payload returned from the root endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    /// Human-readable greeting.
    #[schema(example = "Welcome to the Items API!")]
    pub message: String,
    /// Coarse service state.
    #[schema(example = "running")]
    pub status: String,
}

/// Root endpoint returning a static status message.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service greeting", body = WelcomeResponse)
    ),
    tags = ["meta"],
    operation_id = "welcome"
)]
#[get("/")]
pub async fn welcome() -> web::Json<WelcomeResponse> {
    web::Json(WelcomeResponse {
        message: "Welcome to the Items API!".to_owned(),
        status: "running".to_owned(),
    })
}
