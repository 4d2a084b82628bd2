//! API route configuration.

use crate::api::handlers::{
    create_item_handler, delete_item_handler, get_item_handler, info_handler,
    list_items_handler, login_handler, me_handler, register_handler, update_item_handler,
};
use crate::api::middleware::auth;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Item routes, nested under `/api/v1`.
///
/// # Endpoints
///
/// - `GET    /`            - API information
/// - `GET    /items`       - List items (paginated)
/// - `POST   /items`       - Create an item
/// - `GET    /items/{id}`  - Fetch one item
/// - `PUT    /items/{id}`  - Partially update an item
/// - `DELETE /items/{id}`  - Delete an item
pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(info_handler))
        .route("/items", get(list_items_handler).post(create_item_handler))
        .route(
            "/items/{id}",
            get(get_item_handler)
                .put(update_item_handler)
                .delete(delete_item_handler),
        )
}

/// Authentication routes, nested under `/auth`.
///
/// `GET /me` requires a Bearer token; register and login are public.
pub fn auth_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(me_handler))
        .route_layer(middleware::from_fn_with_state(state, auth::layer));

    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .merge(protected)
}
