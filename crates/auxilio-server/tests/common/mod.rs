//! Shared helpers for server integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use auxilio_core::Recommender;
use auxilio_server::{build_router, AppState};
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

/// Router over the built-in catalogue, plus its shared state.
pub fn create_test_app() -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Recommender::builtin()));
    (build_router(state.clone()), state)
}

/// Sends `body` as JSON to `POST /recommend`.
pub async fn post_recommend(app: Router, body: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/recommend")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request"),
    )
    .await
    .expect("Request failed")
}

/// Sends `GET uri`.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request"),
    )
    .await
    .expect("Request failed")
}

/// Reads a response body as JSON.
pub async fn json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&body).expect("Invalid JSON")
}
