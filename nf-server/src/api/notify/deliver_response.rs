use serde::Serialize;

/// Delivery endpoint response body
#[derive(Debug, Serialize)]
pub struct DeliverResponse {
    pub success: bool,
}
