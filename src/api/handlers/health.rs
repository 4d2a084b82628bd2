//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::config::StoreBackend;
use crate::state::AppState;

pub const SERVICE_NAME: &str = "Kaivora API";

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Store answered
/// - **503 Service Unavailable**: Store query failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "Kaivora API",
///   "version": "1.0.0",
///   "environment": "development",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "checks": {
///     "store": { "status": "ok", "message": "postgres store reachable, 12 items" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;
    let healthy = store_check.is_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.environment.to_string(),
        timestamp: Utc::now(),
        checks: HealthChecks { store: store_check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks the store by counting items.
async fn check_store(state: &AppState) -> CheckStatus {
    match state.item_service.count_items().await {
        Ok(count) => CheckStatus::ok(format!(
            "{} store reachable, {} items",
            state.store_backend, count
        )),
        Err(e) => {
            tracing::warn!(error = %e, "Health check: store query failed");
            let backend = match state.store_backend {
                StoreBackend::Memory => "Memory store",
                StoreBackend::Postgres => "Database",
            };
            CheckStatus::error(format!("{backend} unavailable"))
        }
    }
}
