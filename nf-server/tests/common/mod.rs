#![allow(dead_code)]

//! Test infrastructure for nf-server API tests

use nf_auth::{Claims, JwtValidator};
use nf_core::{MemoryProfileStore, NotificationService, RetentionPolicy};
use nf_server::state::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const TEST_SHARED_SECRET: &str = "ThisReallyIsSecretEnough";
pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Create AppState for testing, auth disabled (X-Identity dev mode)
pub fn create_test_app_state() -> AppState {
    create_test_app_state_with_retention(RetentionPolicy::RetainOnRead)
}

pub fn create_test_app_state_with_retention(retention: RetentionPolicy) -> AppState {
    AppState {
        service: Some(NotificationService::new(
            Arc::new(MemoryProfileStore::new()),
            retention,
        )),
        shared_secret: TEST_SHARED_SECRET.to_string(),
        jwt_validator: None,
        dev_identity: "test-user@local".to_string(),
    }
}

/// Create AppState with JWT auth enabled (HS256, TEST_JWT_SECRET)
pub fn create_authed_app_state() -> AppState {
    let mut state = create_test_app_state();
    state.jwt_validator = Some(Arc::new(JwtValidator::with_hs256(TEST_JWT_SECRET)));
    state
}

/// Create AppState with no notification service wired in
pub fn create_serviceless_app_state() -> AppState {
    let mut state = create_test_app_state();
    state.service = None;
    state
}

/// Forge a bearer token for `identity` signed with TEST_JWT_SECRET
pub fn bearer_token(identity: &str) -> String {
    let claims = Claims {
        sub: identity.to_string(),
        upn: Some(identity.to_string()),
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
        roles: Vec::new(),
    };
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_JWT_SECRET),
    )
    .unwrap();
    format!("Bearer {}", token)
}

/// One-shot a request against a fresh router sharing `state`
pub async fn send(state: &AppState, request: Request<Body>) -> Response<Body> {
    nf_server::routes::build_router(state.clone())
        .oneshot(request)
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// GET a user endpoint as `identity` (X-Identity dev-mode header)
pub fn user_request(method: &str, uri: &str, identity: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("X-Identity", identity)
        .body(Body::empty())
        .unwrap()
}

/// Delivery request with the given secret and message headers
pub fn notify_request(secret: Option<&str>, message: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/api/notify");
    if let Some(secret) = secret {
        builder = builder.header("$secret", secret);
    }
    if let Some(message) = message {
        builder = builder.header("$message", message);
    }
    builder.body(Body::empty()).unwrap()
}

/// Fan-out runs on a spawned task; poll until the subscriber sees
/// `expected` messages or the deadline passes.
pub async fn wait_for_messages(
    state: &AppState,
    identity: &str,
    expected: usize,
) -> Vec<String> {
    for _ in 0..100 {
        let response = send(state, user_request("GET", "/api/v1/messages", identity)).await;
        let json = body_json(response).await;
        let messages: Vec<String> = json["messages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m.as_str().unwrap().to_string())
            .collect();
        if messages.len() >= expected {
            return messages;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("subscriber {} never saw {} message(s)", identity, expected);
}
