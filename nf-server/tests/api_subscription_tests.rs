//! Integration tests for subscription API handlers
mod common;

use crate::common::{
    bearer_token, body_json, create_authed_app_state, create_serviceless_app_state,
    create_test_app_state, send, user_request,
};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};

#[tokio::test]
async fn test_never_seen_identity_is_not_subscribed() {
    let state = create_test_app_state();

    let response = send(&state, user_request("GET", "/api/v1/subscription", "alice")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["subscribed"], false);
}

#[tokio::test]
async fn test_subscribe_then_query_reports_subscribed() {
    let state = create_test_app_state();

    let response = send(&state, user_request("PUT", "/api/v1/subscription", "alice")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["subscribed"], true);

    let response = send(&state, user_request("GET", "/api/v1/subscription", "alice")).await;
    assert_eq!(body_json(response).await["subscribed"], true);
}

#[tokio::test]
async fn test_unsubscribe_then_query_reports_unsubscribed() {
    let state = create_test_app_state();

    send(&state, user_request("PUT", "/api/v1/subscription", "alice")).await;
    let response = send(&state, user_request("DELETE", "/api/v1/subscription", "alice")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["subscribed"], false);

    let response = send(&state, user_request("GET", "/api/v1/subscription", "alice")).await;
    assert_eq!(body_json(response).await["subscribed"], false);
}

#[tokio::test]
async fn test_subscribe_and_unsubscribe_are_idempotent() {
    let state = create_test_app_state();

    for _ in 0..3 {
        let response = send(&state, user_request("PUT", "/api/v1/subscription", "alice")).await;
        assert_eq!(body_json(response).await["subscribed"], true);
    }
    for _ in 0..3 {
        let response =
            send(&state, user_request("DELETE", "/api/v1/subscription", "alice")).await;
        assert_eq!(body_json(response).await["subscribed"], false);
    }
}

#[tokio::test]
async fn test_subscriptions_are_per_identity() {
    let state = create_test_app_state();

    send(&state, user_request("PUT", "/api/v1/subscription", "alice")).await;

    let response = send(&state, user_request("GET", "/api/v1/subscription", "bob")).await;
    assert_eq!(body_json(response).await["subscribed"], false);
}

#[tokio::test]
async fn test_valid_bearer_token_resolves_identity() {
    let state = create_authed_app_state();

    let request = Request::builder()
        .method("PUT")
        .uri("/api/v1/subscription")
        .header("Authorization", bearer_token("alice@example.com"))
        .body(Body::empty())
        .unwrap();
    let response = send(&state, request).await;
    assert_eq!(body_json(response).await["subscribed"], true);

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/subscription")
        .header("Authorization", bearer_token("alice@example.com"))
        .body(Body::empty())
        .unwrap();
    let response = send(&state, request).await;
    assert_eq!(body_json(response).await["subscribed"], true);
}

#[tokio::test]
async fn test_unauthenticated_caller_gets_defaults_not_401() {
    let state = create_authed_app_state();

    // No Authorization header at all
    let request = Request::builder()
        .method("PUT")
        .uri("/api/v1/subscription")
        .body(Body::empty())
        .unwrap();
    let response = send(&state, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["subscribed"], false);

    // Garbage bearer token
    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/subscription")
        .header("Authorization", "Bearer not-a-jwt")
        .body(Body::empty())
        .unwrap();
    let response = send(&state, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["subscribed"], false);
}

#[tokio::test]
async fn test_without_service_subscription_endpoints_are_noops() {
    let state = create_serviceless_app_state();

    let response = send(&state, user_request("PUT", "/api/v1/subscription", "alice")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["subscribed"], false);

    let response = send(&state, user_request("GET", "/api/v1/subscription", "alice")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["subscribed"], false);

    let response = send(&state, user_request("DELETE", "/api/v1/subscription", "alice")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["subscribed"], false);
}
