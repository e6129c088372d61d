//! Message queue REST API handler

use crate::state::AppState;
use crate::{Identity, MessageListResponse};

use axum::{Json, extract::State};

/// GET /api/v1/messages
///
/// The caller's queued messages in insertion order. Whether the read drains
/// the queue is the service's retention policy; the handler is agnostic.
pub async fn list_messages(
    State(state): State<AppState>,
    identity: Identity,
) -> Json<MessageListResponse> {
    let messages = match &state.service {
        Some(service) => service.collected_messages(identity.as_deref()).await,
        None => Vec::new(),
    };

    Json(MessageListResponse { messages })
}
