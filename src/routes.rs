//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`   - Health check (public)
//! - `/api/v1/*`      - Item API and API information (public)
//! - `/auth/*`        - Register, login, current user
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Origins from configuration
//! - **Authentication** - Bearer token on `/auth/me`
//!
//! Trailing-slash normalization wraps the whole router in
//! [`crate::server::run`], because a `NormalizePath` service cannot be
//! nested or layered further.

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_origins` - allowed origins; `*` allows any
pub fn app_router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/v1", api::routes::item_routes())
        .nest("/auth", api::routes::auth_routes(state.clone()))
        .with_state(state)
        .layer(cors::layer(cors_origins))
        .layer(tracing::layer())
}
