//! Item CRUD HTTP handlers.
//!
//! ```text
//! GET    /items
//! GET    /items/{id}
//! POST   /items
//! PUT    /items/{id}
//! DELETE /items/{id}
//! ```

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Item, ItemDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::missing_field_error;

/// Request payload for creating or updating an item.
///
/// Every field is optional at the serde layer; presence of the required
/// fields is checked explicitly so validation failures carry field-level
/// details rather than a deserialization message.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ItemRequestBody {
    /// Display name of the item (required).
    pub name: Option<String>,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Unit price (required).
    pub price: Option<f64>,
    /// Grouping category (required).
    pub category: Option<String>,
}

/// Response payload for a stored item.
///
/// `description` is always present and encodes as `null` when unset.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    /// Server-assigned identifier.
    pub id: u64,
    /// Display name of the item.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Grouping category.
    pub category: String,
}

impl From<Item> for ItemResponse {
    fn from(value: Item) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            price: value.price,
            category: value.category,
        }
    }
}

/// Confirmation payload returned by the delete operation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    /// Fixed-format confirmation, returned whether or not the id existed.
    #[schema(example = "Item 1 deleted successfully")]
    pub message: String,
}

fn parse_item_request(payload: ItemRequestBody) -> Result<ItemDraft, Error> {
    let name = payload.name.ok_or_else(|| missing_field_error("name"))?;
    let price = payload.price.ok_or_else(|| missing_field_error("price"))?;
    let category = payload
        .category
        .ok_or_else(|| missing_field_error("category"))?;

    Ok(ItemDraft {
        name,
        description: payload.description,
        price,
        category,
    })
}

fn item_not_found() -> Error {
    Error::not_found("Item not found")
}

/// List all items in insertion order.
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "All stored items", body = [ItemResponse])
    ),
    tags = ["items"],
    operation_id = "listItems"
)]
#[get("/items")]
pub async fn list_items(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<ItemResponse>>> {
    let store = state.store()?;
    let items = store
        .list()
        .iter()
        .cloned()
        .map(ItemResponse::from)
        .collect();
    Ok(web::Json(items))
}

/// Fetch a single item by id.
#[utoipa::path(
    get,
    path = "/items/{id}",
    params(("id" = u64, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "The stored item", body = ItemResponse),
        (status = 404, description = "No item with that id", body = Error),
        (status = 422, description = "Non-integer id", body = Error)
    ),
    tags = ["items"],
    operation_id = "getItem"
)]
#[get("/items/{id}")]
pub async fn get_item(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<ItemResponse>> {
    let id = path.into_inner();
    let store = state.store()?;
    let item = store.get(id).cloned().ok_or_else(item_not_found)?;
    Ok(web::Json(ItemResponse::from(item)))
}

/// Create a new item, assigning the next identifier.
#[utoipa::path(
    post,
    path = "/items",
    request_body = ItemRequestBody,
    responses(
        (status = 200, description = "The created item", body = ItemResponse),
        (status = 422, description = "Missing or mistyped fields", body = Error)
    ),
    tags = ["items"],
    operation_id = "createItem"
)]
#[post("/items")]
pub async fn create_item(
    state: web::Data<HttpState>,
    payload: web::Json<ItemRequestBody>,
) -> ApiResult<web::Json<ItemResponse>> {
    let draft = parse_item_request(payload.into_inner())?;
    let item = state.store()?.insert(draft);
    Ok(web::Json(ItemResponse::from(item)))
}

/// Replace every field of an existing item except its id.
#[utoipa::path(
    put,
    path = "/items/{id}",
    params(("id" = u64, Path, description = "Item identifier")),
    request_body = ItemRequestBody,
    responses(
        (status = 200, description = "The updated item", body = ItemResponse),
        (status = 404, description = "No item with that id", body = Error),
        (status = 422, description = "Missing or mistyped fields", body = Error)
    ),
    tags = ["items"],
    operation_id = "updateItem"
)]
#[put("/items/{id}")]
pub async fn update_item(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    payload: web::Json<ItemRequestBody>,
) -> ApiResult<web::Json<ItemResponse>> {
    let id = path.into_inner();
    // Validate before touching the store so malformed bodies mutate nothing.
    let draft = parse_item_request(payload.into_inner())?;
    let item = state.store()?.replace(id, draft).ok_or_else(item_not_found)?;
    Ok(web::Json(ItemResponse::from(item)))
}

/// Delete an item by id. Idempotent: deleting an absent id still
/// returns the confirmation message.
#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(("id" = u64, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "Deletion confirmation", body = DeleteResponse)
    ),
    tags = ["items"],
    operation_id = "deleteItem"
)]
#[delete("/items/{id}")]
pub async fn delete_item(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<DeleteResponse>> {
    let id = path.into_inner();
    // The contract reports success whether or not anything matched.
    let _removed = state.store()?.remove(id);
    Ok(web::Json(DeleteResponse {
        message: format!("Item {id} deleted successfully"),
    }))
}
