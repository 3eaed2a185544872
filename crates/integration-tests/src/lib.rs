//! Integration tests for PostShip.
//!
//! Tests drive the assembled axum router in-process with
//! `tower::ServiceExt::oneshot` - no network, no external server, no
//! database. Each `test_app()` call builds a fresh application with an
//! empty in-memory store; router clones share that store, so multi-request
//! scenarios (create then track) reuse one app value.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p postship-integration-tests
//! ```

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde::Serialize;
use serde_json::Value;
use tower::ServiceExt;

use postship_api::config::ApiConfig;
use postship_api::routes;
use postship_api::state::AppState;

/// Build a fresh application router with default config and empty stores.
#[must_use]
pub fn test_app() -> Router {
    routes::app(AppState::new(ApiConfig::default()))
}

/// Send a request to the app and return status plus raw body bytes.
///
/// # Panics
///
/// Panics if the request cannot be dispatched or the body cannot be read.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request dispatch failed");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    (status, body.to_vec())
}

/// GET a JSON endpoint.
///
/// # Panics
///
/// Panics if the response body is not valid JSON.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request build failed");
    let (status, body) = send(app, request).await;
    let json = serde_json::from_slice(&body).expect("response body is not JSON");
    (status, json)
}

/// POST a JSON body to an endpoint.
///
/// # Panics
///
/// Panics if the body cannot be serialized or the response body is not
/// valid JSON.
pub async fn post_json(app: &Router, uri: &str, body: &impl Serialize) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_string(body).expect("body serialization failed"),
        ))
        .expect("request build failed");
    let (status, body) = send(app, request).await;
    let json = serde_json::from_slice(&body).expect("response body is not JSON");
    (status, json)
}
