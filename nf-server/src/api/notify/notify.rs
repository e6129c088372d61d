//! Trusted-caller delivery endpoint.
//!
//! The only security-relevant boundary: a shared secret in the `$secret`
//! header gates broadcast delivery. The failure response leaks nothing about
//! the expected secret.

use crate::DeliverResponse;
use crate::state::AppState;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};

/// GET /api/notify
///
/// Headers: `$secret` (shared secret), `$message` (payload).
///
/// On a matching secret the fan-out task is spawned and the response is sent
/// without awaiting its completion; fan-out failures are never surfaced to
/// the caller.
pub async fn deliver_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> (StatusCode, Json<DeliverResponse>) {
    let presented = headers
        .get("$secret")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if presented != state.shared_secret {
        log::warn!("Delivery request rejected: bad shared secret");
        return (
            StatusCode::UNAUTHORIZED,
            Json(DeliverResponse { success: false }),
        );
    }

    // Missing $message delivers an empty message, matching the reference
    let message = headers
        .get("$message")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    match &state.service {
        Some(service) => {
            // Fire and forget: drop the handle, the response does not wait
            let _ = service.send_notification(message);
        }
        None => {
            log::warn!("Notification service not configured, dropping message");
        }
    }

    (StatusCode::OK, Json(DeliverResponse { success: true }))
}
