//! Subscription REST API handlers
//!
//! An unresolvable identity is answered with defaults, not an error: queries
//! report "not subscribed" and mutations are no-ops.

use crate::state::AppState;
use crate::{Identity, SubscriptionResponse};

use axum::{Json, extract::State};

/// GET /api/v1/subscription
///
/// Current subscription state for the caller
pub async fn get_subscription(
    State(state): State<AppState>,
    identity: Identity,
) -> Json<SubscriptionResponse> {
    let subscribed = match &state.service {
        Some(service) => service.is_subscribed(identity.as_deref()).await,
        None => false,
    };

    Json(SubscriptionResponse { subscribed })
}

/// PUT /api/v1/subscription
///
/// Subscribe the caller to the broadcast channel. Idempotent.
pub async fn subscribe(
    State(state): State<AppState>,
    identity: Identity,
) -> Json<SubscriptionResponse> {
    let subscribed = match &state.service {
        Some(service) => {
            service.subscribe(identity.as_deref()).await;
            service.is_subscribed(identity.as_deref()).await
        }
        None => false,
    };

    Json(SubscriptionResponse { subscribed })
}

/// DELETE /api/v1/subscription
///
/// Unsubscribe the caller from the broadcast channel. Idempotent.
pub async fn unsubscribe(
    State(state): State<AppState>,
    identity: Identity,
) -> Json<SubscriptionResponse> {
    if let Some(service) = &state.service {
        service.unsubscribe(identity.as_deref()).await;
    }

    Json(SubscriptionResponse { subscribed: false })
}
