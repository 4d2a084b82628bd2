//! CORS policy.

use axum::http::{HeaderName, HeaderValue, Method, header};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

const ALLOWED_METHODS: [Method; 7] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
    Method::HEAD,
    Method::PATCH,
];

fn allowed_headers() -> [HeaderName; 10] {
    [
        header::ACCEPT,
        header::ACCEPT_LANGUAGE,
        header::CONTENT_LANGUAGE,
        header::CONTENT_TYPE,
        header::AUTHORIZATION,
        HeaderName::from_static("x-requested-with"),
        HeaderName::from_static("x-api-key"),
        header::ORIGIN,
        header::CACHE_CONTROL,
        header::PRAGMA,
    ]
}

fn exposed_headers() -> [HeaderName; 4] {
    [
        header::CONTENT_LENGTH,
        header::CONTENT_TYPE,
        HeaderName::from_static("x-total-count"),
        HeaderName::from_static("x-page-count"),
    ]
}

/// Creates the CORS layer for the configured origins.
///
/// A `*` entry allows any origin; credentials are then disabled, since
/// browsers reject a wildcard origin with credentials. Otherwise only the
/// listed origins are allowed, with credentials. Entries that are not valid
/// header values are skipped with a warning.
pub fn layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(allowed_headers())
        .expose_headers(exposed_headers())
        .max_age(Duration::from_secs(3600));

    if origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(parsed))
        .allow_credentials(true)
}
