#![allow(dead_code)]

use axum_test::TestServer;
use chrono::Duration;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;
use kaivora_api::config::StoreBackend;
use kaivora_api::infrastructure::persistence::{PgItemRepository, PgUserRepository};
use kaivora_api::routes::app_router;
use kaivora_api::state::AppState;
use kaivora_api::utils::jwt::TokenSigner;

pub const TEST_SECRET: &str = "test-signing-secret";

pub fn create_memory_state() -> AppState {
    AppState::in_memory(TEST_SECRET, Duration::minutes(30), "test")
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    AppState::new(
        Arc::new(PgItemRepository::new(pool.clone())),
        Arc::new(PgUserRepository::new(pool)),
        TokenSigner::new(TEST_SECRET),
        Duration::minutes(30),
        StoreBackend::Postgres,
        "test",
    )
}

pub fn make_server(state: AppState) -> TestServer {
    let origins = vec!["http://localhost:3000".to_string()];
    TestServer::new(app_router(state, &origins)).unwrap()
}

/// Server over fresh in-memory stores.
pub fn make_memory_server() -> TestServer {
    make_server(create_memory_state())
}

pub async fn create_item(server: &TestServer, name: &str, price: f64) -> Value {
    let response = server
        .post("/api/v1/items")
        .json(&json!({ "name": name, "price": price }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

/// Registers a user and returns the issued access token.
pub async fn register_user(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/auth/register")
        .json(&json!({
            "username": username,
            "email": format!("{username}@kaivora.org"),
            "password": password,
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Asserts a validation envelope and returns the offending field names.
pub fn validation_fields(body: &Value) -> Vec<String> {
    assert_eq!(body["error"], "VALIDATION_ERROR");
    body["details"]["validation_errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_string())
        .collect()
}
