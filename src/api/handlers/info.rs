//! API information endpoint.

use axum::Json;
use serde::Serialize;

use crate::api::dto::response::ApiResponse;

const ENDPOINTS: [&str; 10] = [
    "GET /api/v1/ - API Information",
    "GET /api/v1/items - List all items",
    "POST /api/v1/items - Create new item",
    "GET /api/v1/items/{item_id} - Get specific item",
    "PUT /api/v1/items/{item_id} - Update specific item",
    "DELETE /api/v1/items/{item_id} - Delete specific item",
    "POST /auth/register - Register new user",
    "POST /auth/login - Login with credentials",
    "GET /auth/me - Current user profile",
    "GET /health - Service health",
];

#[derive(Debug, Serialize)]
pub struct ApiInfo {
    pub endpoints: Vec<&'static str>,
}

/// `GET /api/v1/`
pub async fn info_handler() -> Json<ApiResponse<ApiInfo>> {
    Json(ApiResponse::new(
        "Kaivora API is running successfully",
        ApiInfo {
            endpoints: ENDPOINTS.to_vec(),
        },
    ))
}
