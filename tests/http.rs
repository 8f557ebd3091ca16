//! HTTP surface tests driven through the router without a socket

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use social_graph::api::create_app;
use social_graph::{AppState, Config, MemStore};
use tower::ServiceExt;

fn app() -> (Router, AppState) {
    let mut store = MemStore::new();
    store.seed_demo_data();
    let state = AppState::new(store.into_shared(), Config::default()).unwrap();
    (create_app(state.clone()), state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn operation(app: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::post("/api/operations")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn mutation_then_query_round_trip() {
    let (app, _) = app();

    let (status, body) = operation(
        &app,
        json!({ "operation": "likePost", "arguments": { "postId": "0", "userId": "1" } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["likes"][0]["name"], "Bob");
    assert!(body.get("errors").is_none());

    let (_, body) = operation(
        &app,
        json!({ "operation": "getPost", "arguments": { "id": "0" }, "select": ["likes"] }),
    )
    .await;
    assert_eq!(body["data"]["likes"].as_array().unwrap().len(), 1);
    assert!(body["data"].get("author").is_none());
}

#[tokio::test]
async fn missing_entity_query_returns_null_data() {
    let (app, _) = app();
    let (status, body) =
        operation(&app, json!({ "operation": "getPost", "arguments": { "id": "999" } })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": null }));
}

#[tokio::test]
async fn operation_errors_map_to_status_codes() {
    let (app, _) = app();

    let (status, body) = operation(
        &app,
        json!({ "operation": "addUser", "arguments": { "name": "", "email": "x@example.com" } }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["kind"], "VALIDATION");
    assert!(body.get("data").is_none());

    let (status, body) = operation(
        &app,
        json!({ "operation": "followUser", "arguments": { "followerId": "9", "followingId": "0" } }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"][0]["message"], "User not found: 9");

    let (status, body) = operation(&app, json!({ "operation": "dropTables" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["kind"], "UNKNOWN_OPERATION");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let (app, _) = app();
    let request = Request::post("/api/operations")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn rest_routes_wrap_views() {
    let (app, _) = app();

    let (status, body) = get_json(&app, "/api/users?select=posts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"][0]["posts"][0]["title"], "First Post");
    assert!(body["data"][0].get("followers").is_none());

    let (status, body) = get_json(&app, "/api/posts/0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["author"]["email"], "alice@example.com");

    let (status, body) = get_json(&app, "/api/users/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["details"]["kind"], "NOT_FOUND");

    let (status, _) = get_json(&app, "/api/posts?select=bogus").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_reports_record_counts() {
    let (app, _) = app();
    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["records"], json!({ "users": 2, "posts": 1, "comments": 0 }));

    let (_, info) = get_json(&app, "/info").await;
    assert_eq!(info["operations"].as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn metrics_count_operations() {
    let (app, state) = app();
    operation(
        &app,
        json!({ "operation": "addComment", "arguments": { "postId": "0", "userId": "1", "content": "nice" } }),
    )
    .await;

    let metrics = state.metrics.as_ref().unwrap();
    assert_eq!(
        metrics.operations.with_label_values(&["addComment", "ok"]).get(),
        1
    );

    let request = Request::get("/metrics").body(Body::empty()).unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("sg_records{collection=\"comments\"} 1"));
}
