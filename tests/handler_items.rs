mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_item_rounds_price() {
    let server = common::make_memory_server();

    let response = server
        .post("/api/v1/items")
        .json(&json!({ "name": "Widget", "price": 9.999 }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["name"], "Widget");
    assert_eq!(json["price"], 10.0);
    assert!(json["id"].as_i64().unwrap() > 0);
    assert_eq!(json["is_active"], true);
    assert!(json["description"].is_null());
    assert!(json["updated_at"].is_null());
    assert!(json["created_at"].is_string());
}

#[tokio::test]
async fn test_create_item_trims_name() {
    let server = common::make_memory_server();

    let json = server
        .post("/api/v1/items")
        .json(&json!({ "name": "  Gadget  ", "description": "Shiny", "price": 1 }))
        .await
        .json::<Value>();

    assert_eq!(json["name"], "Gadget");
    assert_eq!(json["description"], "Shiny");
}

#[tokio::test]
async fn test_create_item_whitespace_name_rejected() {
    let server = common::make_memory_server();

    let response = server
        .post("/api/v1/items")
        .json(&json!({ "name": "   ", "price": 1.0 }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(common::validation_fields(&response.json()), vec!["name"]);
}

#[tokio::test]
async fn test_create_item_reports_every_invalid_field() {
    let server = common::make_memory_server();

    let response = server
        .post("/api/v1/items")
        .json(&json!({ "description": "d".repeat(501), "price": -1 }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let mut fields = common::validation_fields(&response.json());
    fields.sort();
    assert_eq!(fields, vec!["description", "name", "price"]);
}

#[tokio::test]
async fn test_create_item_malformed_json() {
    let server = common::make_memory_server();

    let response = server
        .post("/api/v1/items")
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let json = response.json::<Value>();
    assert_eq!(json["error"], "VALIDATION_ERROR");
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_create_item_failure_creates_nothing() {
    let server = common::make_memory_server();

    server
        .post("/api/v1/items")
        .json(&json!({ "name": "", "price": 1 }))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let response = server.get("/api/v1/items").await;
    assert_eq!(response.header("x-total-count"), "0");
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_item() {
    let server = common::make_memory_server();
    let created = common::create_item(&server, "Widget", 2.5).await;
    let id = created["id"].as_i64().unwrap();

    let response = server.get(&format!("/api/v1/items/{id}")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), created);
}

#[tokio::test]
async fn test_get_item_not_found() {
    let server = common::make_memory_server();

    let response = server.get("/api/v1/items/999").await;

    response.assert_status_not_found();
    let json = response.json::<Value>();
    assert_eq!(json["error"], "NOT_FOUND");
    assert_eq!(json["message"], "Item with ID 999 not found");
    assert_eq!(json["details"]["item_id"], 999);
}

#[tokio::test]
async fn test_get_item_non_numeric_id() {
    let server = common::make_memory_server();

    let response = server.get("/api/v1/items/abc").await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(common::validation_fields(&response.json()), vec!["path"]);
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_items_pagination() {
    let server = common::make_memory_server();
    for name in ["first", "second", "third"] {
        common::create_item(&server, name, 1.0).await;
    }

    let response = server
        .get("/api/v1/items")
        .add_query_param("skip", 1)
        .add_query_param("limit", 1)
        .await;

    response.assert_status_ok();
    let items = response.json::<Vec<Value>>();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "second");
    assert_eq!(response.header("x-total-count"), "3");
    assert_eq!(response.header("x-page-count"), "3");
}

#[tokio::test]
async fn test_list_items_defaults_and_order() {
    let server = common::make_memory_server();
    for name in ["a", "b", "c"] {
        common::create_item(&server, name, 1.0).await;
    }

    let items = server.get("/api/v1/items").await.json::<Vec<Value>>();

    let names: Vec<&str> = items.iter().map(|i| i["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_list_items_skip_past_end_is_empty() {
    let server = common::make_memory_server();
    common::create_item(&server, "only", 1.0).await;

    let response = server.get("/api/v1/items?skip=50").await;

    response.assert_status_ok();
    assert!(response.json::<Vec<Value>>().is_empty());
    assert_eq!(response.header("x-total-count"), "1");
}

#[tokio::test]
async fn test_list_items_negative_skip_rejected() {
    let server = common::make_memory_server();

    let response = server.get("/api/v1/items?skip=-1").await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(common::validation_fields(&response.json()), vec!["query"]);
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_item_partial() {
    let server = common::make_memory_server();
    let created = server
        .post("/api/v1/items")
        .json(&json!({ "name": "Widget", "description": "Blue", "price": 1.0 }))
        .await
        .json::<Value>();
    let id = created["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/api/v1/items/{id}"))
        .json(&json!({ "price": 5 }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["price"], 5.0);
    assert_eq!(json["name"], "Widget");
    assert_eq!(json["description"], "Blue");
    assert_eq!(json["created_at"], created["created_at"]);
    assert!(json["updated_at"].is_string());
}

#[tokio::test]
async fn test_update_item_clears_description_and_deactivates() {
    let server = common::make_memory_server();
    let created = server
        .post("/api/v1/items")
        .json(&json!({ "name": "Widget", "description": "Blue", "price": 1.0 }))
        .await
        .json::<Value>();
    let id = created["id"].as_i64().unwrap();

    let json = server
        .put(&format!("/api/v1/items/{id}"))
        .json(&json!({ "description": null, "is_active": false }))
        .await
        .json::<Value>();

    assert!(json["description"].is_null());
    assert_eq!(json["is_active"], false);
}

#[tokio::test]
async fn test_update_item_null_name_rejected() {
    let server = common::make_memory_server();
    let id = common::create_item(&server, "Widget", 1.0).await["id"]
        .as_i64()
        .unwrap();

    let response = server
        .put(&format!("/api/v1/items/{id}"))
        .json(&json!({ "name": null }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(common::validation_fields(&response.json()), vec!["name"]);

    let unchanged = server.get(&format!("/api/v1/items/{id}")).await.json::<Value>();
    assert_eq!(unchanged["name"], "Widget");
    assert!(unchanged["updated_at"].is_null());
}

#[tokio::test]
async fn test_update_item_not_found() {
    let server = common::make_memory_server();

    let response = server
        .put("/api/v1/items/42")
        .json(&json!({ "price": 1 }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_update_item_invalid_body_beats_missing_id() {
    let server = common::make_memory_server();

    let response = server
        .put("/api/v1/items/42")
        .json(&json!({ "price": -3 }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_item() {
    let server = common::make_memory_server();
    let id = common::create_item(&server, "Widget", 1.0).await["id"]
        .as_i64()
        .unwrap();

    let response = server.delete(&format!("/api/v1/items/{id}")).await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["message"], "Item 'Widget' deleted successfully");
    assert_eq!(json["data"]["deleted_item_id"], id);
    assert!(json["timestamp"].is_string());

    server
        .get(&format!("/api/v1/items/{id}"))
        .await
        .assert_status_not_found();
    server
        .delete(&format!("/api/v1/items/{id}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_deleted_id_is_not_reused() {
    let server = common::make_memory_server();
    let first = common::create_item(&server, "a", 1.0).await["id"]
        .as_i64()
        .unwrap();
    server.delete(&format!("/api/v1/items/{first}")).await;

    let second = common::create_item(&server, "b", 1.0).await["id"]
        .as_i64()
        .unwrap();

    assert!(second > first);
}
