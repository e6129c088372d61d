use nf_auth::JwtValidator;
use nf_core::NotificationService;

use std::sync::Arc;

/// Shared application state for API handlers.
///
/// `service` is an explicit optional collaborator: when it is absent
/// (misconfigured deployment) every endpoint answers with safe defaults
/// instead of failing the request.
#[derive(Clone)]
pub struct AppState {
    pub service: Option<NotificationService>,
    /// Shared secret the delivery endpoint requires in the `$secret` header
    pub shared_secret: String,
    /// JWT validation; `None` means auth is disabled (dev mode)
    pub jwt_validator: Option<Arc<JwtValidator>>,
    /// Identity assigned to requests when auth is disabled
    pub dev_identity: String,
}
