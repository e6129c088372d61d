use crate::state::AppState;
use crate::{api, health};

use axum::{
    Router,
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Trusted-caller delivery endpoint
        .route("/api/notify", get(api::notify::notify::deliver_notification))
        // User-facing subscription endpoints
        .route(
            "/api/v1/subscription",
            get(api::subscription::subscription::get_subscription)
                .put(api::subscription::subscription::subscribe)
                .delete(api::subscription::subscription::unsubscribe),
        )
        .route("/api/v1/messages", get(api::messages::messages::list_messages))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
