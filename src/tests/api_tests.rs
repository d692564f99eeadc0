use crate::api::handlers::app;
use crate::infrastructure::storage::Storage;
use crate::tests::{FailingLookupStorage, FailingStorage, create_test_service, service_over};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn json_request(body: Value) -> Request<Body> {
    json_request_to("/api/users", body)
}

fn json_request_to(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn test_register_then_replay_is_rejected() {
    let (service, storage) = create_test_service();
    let app = app(service);
    let body = json!({ "name": "Ann", "email": "ann@example.com", "password": "secret1" });

    let (status, bytes) = send(&app, json_request(body.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let payload: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(!payload["token"].as_str().unwrap().is_empty());

    let stored = storage.get_user_by_email("ann@example.com").await.unwrap().unwrap();
    assert_ne!(stored.password, "secret1");

    for _ in 0..2 {
        let (status, bytes) = send(&app, json_request(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let payload: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(payload, json!({ "errors": [{ "msg": "User Already exists" }] }));
    }
    assert_eq!(storage.count_users().await.unwrap(), 1);
}

#[tokio::test]
async fn test_validation_errors_are_listed_per_field() {
    let (service, storage) = create_test_service();
    let app = app(service);

    let (status, bytes) = send(&app, json_request(json!({ "email": "nope", "password": "123" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let payload: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        payload,
        json!({ "errors": [
            { "msg": "Name is required", "param": "name", "location": "body" },
            { "msg": "Please enter valid email", "param": "email", "location": "body" },
            { "msg": "Please enter valid password with >=6 char", "param": "password", "location": "body" }
        ] })
    );
    assert_eq!(storage.count_users().await.unwrap(), 0);
}

#[tokio::test]
async fn test_form_encoded_registration() {
    let (service, storage) = create_test_service();
    let app = app(service);
    let request = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("name=Bob&email=bob%40example.com&password=hunter22"))
        .unwrap();

    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(storage.get_user_by_email("bob@example.com").await.unwrap().is_some());
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (service, _) = create_test_service();
    let app = app(service);
    let request = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let (status, bytes) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let payload: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(payload["errors"][0]["msg"], "Invalid request body");
}

#[tokio::test]
async fn test_storage_failure_is_opaque_server_error() {
    let app = app(service_over(Arc::new(FailingStorage)));
    let body = json!({ "name": "Ann", "email": "ann@example.com", "password": "secret1" });

    let (status, bytes) = send(&app, json_request(body)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(bytes, b"Server error!");
}

#[tokio::test]
async fn test_lookup_failure_is_opaque_server_error() {
    let app = app(service_over(Arc::new(FailingLookupStorage)));
    let body = json!({ "name": "Ann", "email": "ann@example.com", "password": "secret1" });

    let (status, bytes) = send(&app, json_request(body)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(bytes, b"Server error!");
}

#[tokio::test]
async fn test_trailing_slash_reaches_registration() {
    let (service, storage) = create_test_service();
    let app = app(service);
    let body = json!({ "name": "Ann", "email": "ann@example.com", "password": "secret1" });

    let (status, bytes) = send(&app, json_request_to("/api/users/", body.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let payload: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(payload["token"].is_string());

    let (status, _) = send(&app, json_request(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(storage.count_users().await.unwrap(), 1);
}

#[tokio::test]
async fn test_health_check() {
    let (service, _) = create_test_service();
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let (status, bytes) = send(&app(service), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"OK");
}

#[tokio::test]
async fn test_swagger_ui_is_served() {
    let (service, _) = create_test_service();
    let request = Request::builder().uri("/api-docs/openapi.json").body(Body::empty()).unwrap();

    let (status, bytes) = send(&app(service), request).await;
    assert_eq!(status, StatusCode::OK);
    let doc: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(doc["paths"]["/api/users"].is_object());
}
