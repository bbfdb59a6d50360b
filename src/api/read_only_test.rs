//! Tests for the read-only mode gate.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::api::read_only::READ_ONLY_MESSAGE;
use crate::api::{AppState, routes};
use crate::config::Settings;
use crate::store::{MemoryStore, RecordRepository, Store};

/// Create a read-only test app plus a handle on its store
fn read_only_app() -> (axum::Router, std::sync::Arc<MemoryStore>) {
    let state = AppState::new(MemoryStore::with_samples(), Settings { read_only: true });
    let store = state.store_arc();
    (routes::create_router(state), store)
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn reads_pass_through_the_gate() {
    let (app, _) = read_only_app();

    for uri in ["/", "/health", "/resources", "/resources/1", "/resources/1/comments"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    }
}

#[tokio::test]
async fn every_mutating_request_is_rejected_with_the_static_body() {
    let (app, _) = read_only_app();

    let requests = [
        ("POST", "/resources", Some(json!({"name": "n"}))),
        ("PUT", "/resources/1", Some(json!({"name": "n"}))),
        ("PATCH", "/resources/1", Some(json!({"name": "n"}))),
        ("DELETE", "/resources/1", None),
        ("POST", "/resources/1/comments", Some(json!({"content": "c"}))),
    ];

    for (method, uri, payload) in requests {
        let builder = Request::builder().method(method).uri(uri);
        let request = match &payload {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{method} {uri}");
        let body = json_body(response).await;
        assert_eq!(body["detail"], READ_ONLY_MESSAGE);
    }
}

#[tokio::test]
async fn gate_wins_over_existence_checks() {
    let (app, _) = read_only_app();

    // The target id does not exist; the gate must still answer first.
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/resources/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn gated_delete_leaves_the_store_untouched() {
    let (app, store) = read_only_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/resources/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(store.records().get(1).is_ok());
    assert_eq!(store.records().list().unwrap().len(), 3);
}

#[tokio::test]
async fn gate_is_inert_when_disabled() {
    let state = AppState::new(MemoryStore::with_samples(), Settings { read_only: false });
    let app = routes::create_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/resources/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
