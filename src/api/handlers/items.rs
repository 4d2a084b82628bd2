//! Handlers for item management endpoints.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
};

use crate::api::dto::item::{CreateItemRequest, DeletedItem, ItemResponse, UpdateItemRequest};
use crate::api::dto::pagination::{ListItemsQuery, page_count};
use crate::api::dto::response::ApiResponse;
use crate::api::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::error::AppError;
use crate::state::AppState;

pub const TOTAL_COUNT_HEADER: HeaderName = HeaderName::from_static("x-total-count");
pub const PAGE_COUNT_HEADER: HeaderName = HeaderName::from_static("x-page-count");

/// Lists items in creation order.
///
/// # Endpoint
///
/// `GET /api/v1/items?skip=0&limit=100`
///
/// # Response Headers
///
/// - `X-Total-Count` - number of stored items, ignoring pagination
/// - `X-Page-Count` - pages of `limit` items needed to hold them all
///
/// # Errors
///
/// Returns 422 if `skip` or `limit` is negative or not a number.
pub async fn list_items_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListItemsQuery>,
) -> Result<(HeaderMap, Json<Vec<ItemResponse>>), AppError> {
    let items = state
        .item_service
        .list_items(query.skip, query.limit)
        .await?;
    let total = state.item_service.count_items().await?;

    let mut headers = HeaderMap::new();
    headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from(total));
    headers.insert(
        PAGE_COUNT_HEADER,
        HeaderValue::from(page_count(total, query.limit)),
    );

    Ok((
        headers,
        Json(items.into_iter().map(ItemResponse::from).collect()),
    ))
}

/// Creates an item.
///
/// # Endpoint
///
/// `POST /api/v1/items`
///
/// # Request Body
///
/// ```json
/// { "name": "Widget", "description": "optional", "price": 9.99 }
/// ```
///
/// # Errors
///
/// Returns 422 with one entry per invalid field.
pub async fn create_item_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), AppError> {
    let item = state.item_service.create_item(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(item.into())))
}

/// `GET /api/v1/items/{id}`
pub async fn get_item_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ItemResponse>, AppError> {
    let item = state.item_service.get_item(id).await?;
    Ok(Json(item.into()))
}

/// Partially updates an item.
///
/// # Endpoint
///
/// `PUT /api/v1/items/{id}`
///
/// # Request Body
///
/// All fields are optional. Only provided fields are changed; `description:
/// null` clears the description.
///
/// ```json
/// { "price": 5.0, "is_active": false }
/// ```
///
/// # Errors
///
/// - 422 if a supplied field is invalid (checked before the lookup)
/// - 404 if the item does not exist
pub async fn update_item_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdateItemRequest>,
) -> Result<Json<ItemResponse>, AppError> {
    let item = state.item_service.update_item(id, payload.into()).await?;
    Ok(Json(item.into()))
}

/// Deletes an item.
///
/// # Endpoint
///
/// `DELETE /api/v1/items/{id}`
///
/// # Response
///
/// ```json
/// {
///   "message": "Item 'Widget' deleted successfully",
///   "data": { "deleted_item_id": 1 },
///   "timestamp": "2026-01-01T00:00:00Z"
/// }
/// ```
pub async fn delete_item_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ApiResponse<DeletedItem>>, AppError> {
    let item = state.item_service.delete_item(id).await?;

    Ok(Json(ApiResponse::new(
        format!("Item '{}' deleted successfully", item.name),
        DeletedItem {
            deleted_item_id: item.id,
        },
    )))
}
