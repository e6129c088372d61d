use serde::Serialize;

/// Subscription state response
#[derive(Debug, Serialize)]
pub struct SubscriptionResponse {
    pub subscribed: bool,
}
