//! Integration tests for TodoList API endpoints.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::api::{AppState, create_router};
use crate::db::MemoryDatabase;

fn test_app() -> axum::Router {
    create_router(AppState::new(Arc::new(MemoryDatabase::new())))
}

/// Send a request and return status plus parsed body (`Null` when empty).
async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

// =============================================================================
// GET /api/toDoLists
// =============================================================================

#[tokio::test]
async fn list_lists_initially_empty() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/api/toDoLists", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn list_lists_returns_creation_order() {
    let app = test_app();
    for name in ["Zebra", "Apple"] {
        send(&app, "POST", "/api/toDoLists", Some(json!({"name": name}))).await;
    }

    let (_, body) = send(&app, "GET", "/api/toDoLists", None).await;
    assert_eq!(
        body,
        json!([{"id": 1, "name": "Zebra"}, {"id": 2, "name": "Apple"}])
    );
}

// =============================================================================
// POST /api/toDoLists
// =============================================================================

#[tokio::test]
async fn create_list_returns_201() {
    let app = test_app();

    let (status, body) = send(&app, "POST", "/api/toDoLists", Some(json!({"name": "List 1"}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "name": "List 1"}));
}

#[tokio::test]
async fn create_list_without_name_returns_400() {
    let app = test_app();

    for payload in [json!({"name": ""}), json!({}), json!({"name": null})] {
        let (status, body) = send(&app, "POST", "/api/toDoLists", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Name is required for creating a todo list");
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["error"], "Bad Request");
    }
}

#[tokio::test]
async fn create_duplicate_list_returns_400() {
    let app = test_app();
    send(&app, "POST", "/api/toDoLists", Some(json!({"name": "List 1"}))).await;

    let (status, body) = send(&app, "POST", "/api/toDoLists", Some(json!({"name": "List 1"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Todo list already exists");
}

// =============================================================================
// GET /api/toDoLists/{todoListId}
// =============================================================================

#[tokio::test]
async fn get_list_by_id() {
    let app = test_app();
    send(&app, "POST", "/api/toDoLists", Some(json!({"name": "List 1"}))).await;

    let (status, body) = send(&app, "GET", "/api/toDoLists/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "name": "List 1"}));
}

#[tokio::test]
async fn get_unknown_list_returns_404() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/api/toDoLists/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Todo list not found");
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn get_list_with_non_numeric_id_returns_400() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/api/toDoLists/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid todo list ID");
}

// =============================================================================
// PUT /api/toDoLists/{todoListId}
// =============================================================================

#[tokio::test]
async fn update_list_renames() {
    let app = test_app();
    send(&app, "POST", "/api/toDoLists", Some(json!({"name": "List 1"}))).await;

    let (status, body) = send(&app, "PUT", "/api/toDoLists/1", Some(json!({"name": "Updated"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "name": "Updated"}));
}

#[tokio::test]
async fn update_unknown_list_returns_404() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "PUT",
        "/api/toDoLists/999",
        Some(json!({"name": "Non-existent List"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Todo list not found");
}

#[tokio::test]
async fn update_list_without_name_returns_400() {
    let app = test_app();
    send(&app, "POST", "/api/toDoLists", Some(json!({"name": "List 1"}))).await;

    let (status, body) = send(&app, "PUT", "/api/toDoLists/1", Some(json!({"name": ""}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Name is required for updating a todo list");
}

#[tokio::test]
async fn update_list_to_taken_name_returns_400() {
    let app = test_app();
    send(&app, "POST", "/api/toDoLists", Some(json!({"name": "List 1"}))).await;
    send(&app, "POST", "/api/toDoLists", Some(json!({"name": "List 2"}))).await;

    let (status, body) = send(&app, "PUT", "/api/toDoLists/2", Some(json!({"name": "List 1"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Todo list already exists");
}

// =============================================================================
// DELETE /api/toDoLists/{todoListId}
// =============================================================================

#[tokio::test]
async fn delete_list_returns_200_and_removes_it() {
    let app = test_app();
    send(&app, "POST", "/api/toDoLists", Some(json!({"name": "List 1"}))).await;
    send(&app, "POST", "/api/toDoLists", Some(json!({"name": "List 2"}))).await;

    let (status, body) = send(&app, "DELETE", "/api/toDoLists/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (_, body) = send(&app, "GET", "/api/toDoLists", None).await;
    assert_eq!(body, json!([{"id": 2, "name": "List 2"}]));
}

#[tokio::test]
async fn delete_unknown_list_returns_404() {
    let app = test_app();

    let (status, body) = send(&app, "DELETE", "/api/toDoLists/1", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Todo list not found");
}

#[tokio::test]
async fn delete_list_with_invalid_id_returns_400() {
    let app = test_app();

    let (status, body) = send(&app, "DELETE", "/api/toDoLists/invalid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid todo list ID");
}

#[tokio::test]
async fn delete_without_id_is_unrouted() {
    let app = test_app();

    let (status, _) = send(&app, "DELETE", "/api/toDoLists/", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// System
// =============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn docs_are_served() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Unreadable bodies
// =============================================================================

/// Send a raw body, optionally without a content type.
async fn send_raw(
    app: &axum::Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn assert_bad_request(body: &Value) {
    assert_eq!(body["statusCode"], 400);
    assert_eq!(body["error"], "Bad Request");
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn create_list_with_wrongly_typed_name_returns_400() {
    let app = test_app();

    let (status, body) = send(&app, "POST", "/api/toDoLists", Some(json!({"name": 5}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_bad_request(&body);
    let (_, lists) = send(&app, "GET", "/api/toDoLists", None).await;
    assert_eq!(lists, json!([]));
}

#[tokio::test]
async fn create_list_with_malformed_json_returns_400() {
    let app = test_app();

    let (status, body) = send_raw(
        &app,
        "POST",
        "/api/toDoLists",
        Some("application/json"),
        "{\"name\": ",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_bad_request(&body);
}

#[tokio::test]
async fn create_list_without_content_type_returns_400() {
    let app = test_app();

    let (status, body) =
        send_raw(&app, "POST", "/api/toDoLists", None, "{\"name\": \"Groceries\"}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_bad_request(&body);
    let (_, lists) = send(&app, "GET", "/api/toDoLists", None).await;
    assert_eq!(lists, json!([]));
}

#[tokio::test]
async fn update_list_with_empty_body_returns_400() {
    let app = test_app();
    send(&app, "POST", "/api/toDoLists", Some(json!({"name": "Keep"}))).await;

    let (status, body) = send_raw(&app, "PUT", "/api/toDoLists/1", None, "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_bad_request(&body);
    let (_, list) = send(&app, "GET", "/api/toDoLists/1", None).await;
    assert_eq!(list["name"], "Keep");
}
