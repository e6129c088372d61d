use serde::Serialize;

/// Collected messages response, insertion-ordered
#[derive(Debug, Serialize)]
pub struct MessageListResponse {
    pub messages: Vec<String>,
}
