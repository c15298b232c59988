//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated OpenAPI specification covering the
//! meta, health, and item endpoints. The document backs Swagger UI in
//! debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::health::HealthResponse;
use crate::inbound::http::items::{DeleteResponse, ItemRequestBody, ItemResponse};
use crate::inbound::http::meta::WelcomeResponse;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Items API",
        description = "In-memory CRUD over a single collection of item records."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::meta::welcome,
        crate::inbound::http::health::health,
        crate::inbound::http::items::list_items,
        crate::inbound::http::items::get_item,
        crate::inbound::http::items::create_item,
        crate::inbound::http::items::update_item,
        crate::inbound::http::items::delete_item,
    ),
    components(schemas(
        WelcomeResponse,
        HealthResponse,
        ItemRequestBody,
        ItemResponse,
        DeleteResponse,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "meta", description = "Service metadata"),
        (name = "health", description = "Endpoints for health checks"),
        (name = "items", description = "CRUD operations over the item collection")
    )
)]
pub struct ApiDoc;
