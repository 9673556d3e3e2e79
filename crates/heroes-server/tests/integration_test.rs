//! End-to-end integration tests for the heroes HTTP API.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> handler ->
//! HeroService -> SQLite -> HTTP response.
//!
//! Each test creates a fresh AppState backed by its own in-memory SQLite
//! database. Tests use `tower::ServiceExt::oneshot` to send requests directly
//! to the router without starting a network server.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use heroes_server::router::build_router;
use heroes_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Creates a fresh router backed by its own in-memory database.
fn test_app() -> Router {
    let state = AppState::in_memory().expect("failed to create in-memory AppState");
    build_router(state)
}

/// Sends a request with an optional JSON body and returns (status, json).
async fn request_json(
    app: &Router,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(path);

    let body = match body {
        Some(v) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&v).unwrap())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

/// Sends a POST request with a JSON body and returns (status, json).
async fn post_json(
    app: &Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    request_json(app, Method::POST, path, Some(body)).await
}

/// Sends a GET request and returns (status, json).
async fn get_json(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    request_json(app, Method::GET, path, None).await
}

/// Sends a DELETE request and returns (status, json).
async fn delete_json(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    request_json(app, Method::DELETE, path, None).await
}

/// Creates a hero and returns its assigned id.
async fn create_hero(app: &Router, name: &str, age: Option<i64>, secret_name: &str) -> i64 {
    let (status, body) = post_json(
        app,
        "/heroes/",
        json!({ "name": name, "age": age, "secret_name": secret_name }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create hero failed: {:?}", body);
    body["id"].as_i64().unwrap()
}

/// Returns the number of stored heroes.
async fn hero_count(app: &Router) -> usize {
    let (status, body) = get_json(app, "/heroes/").await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().unwrap().len()
}

// ---------------------------------------------------------------------------
// Liveness
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_returns_hello_world() {
    let app = test_app();
    let (status, body) = get_json(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "Hello": "World" }));
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_hero_returns_public_projection() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/heroes/",
        json!({ "name": "Alice", "age": 30, "secret_name": "A" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "name": "Alice", "age": 30 }));
    assert!(body.get("secret_name").is_none());
}

#[tokio::test]
async fn create_hero_without_age_serializes_null() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/heroes/",
        json!({ "name": "Deadpond", "secret_name": "Dive Wilson" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "name": "Deadpond", "age": null }));
}

#[tokio::test]
async fn create_hero_missing_required_field_is_422_and_persists_nothing() {
    let app = test_app();
    let (status, body) = post_json(&app, "/heroes/", json!({ "name": "Alice" })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("secret_name"), "detail was: {}", detail);

    assert_eq!(hero_count(&app).await, 0);
}

#[tokio::test]
async fn create_hero_with_wrong_typed_field_is_422() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/heroes/",
        json!({ "name": "Alice", "age": "thirty", "secret_name": "A" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("age"), "detail was: {}", detail);
    assert_eq!(hero_count(&app).await, 0);
}

#[tokio::test]
async fn create_hero_with_malformed_json_is_422() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/heroes/")
                .header("content-type", "application/json")
                .body(Body::from("not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(hero_count(&app).await, 0);
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[tokio::test]
async fn listing_empty_store_returns_empty_array() {
    let app = test_app();
    let (status, body) = get_json(&app, "/heroes/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn listing_returns_all_heroes_as_projections() {
    let app = test_app();
    create_hero(&app, "Deadpond", None, "Dive Wilson").await;
    create_hero(&app, "Spider-Boy", Some(16), "Pedro Parqueador").await;
    create_hero(&app, "Rusty-Man", Some(48), "Tommy Sharp").await;

    let (status, body) = get_json(&app, "/heroes/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": 1, "name": "Deadpond", "age": null },
            { "id": 2, "name": "Spider-Boy", "age": 16 },
            { "id": 3, "name": "Rusty-Man", "age": 48 },
        ])
    );
}

// ---------------------------------------------------------------------------
// Get by id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_hero_returns_the_full_record() {
    let app = test_app();
    let id = create_hero(&app, "Spider-Boy", Some(16), "Pedro Parqueador").await;

    let (status, body) = get_json(&app, &format!("/heroes/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": id,
            "name": "Spider-Boy",
            "age": 16,
            "secret_name": "Pedro Parqueador",
        })
    );
}

#[tokio::test]
async fn get_missing_hero_is_404() {
    let app = test_app();
    let (status, body) = get_json(&app, "/heroes/-1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Hero not found" }));
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_hero_removes_it_permanently() {
    let app = test_app();
    let id = create_hero(&app, "Alice", Some(30), "A").await;
    create_hero(&app, "Bob", None, "B").await;
    assert_eq!(hero_count(&app).await, 2);

    let (status, body) = delete_json(&app, &format!("/heroes/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Hero deleted successfully"));

    let (status, body) = get_json(&app, &format!("/heroes/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Hero not found" }));

    assert_eq!(hero_count(&app).await, 1);
}

#[tokio::test]
async fn delete_missing_hero_is_404_and_leaves_count_unchanged() {
    let app = test_app();
    create_hero(&app, "Alice", Some(30), "A").await;

    let (status, body) = delete_json(&app, "/heroes/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Hero not found" }));

    assert_eq!(hero_count(&app).await, 1);
}
