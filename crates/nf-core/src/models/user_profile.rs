//! User profile entity - subscription flag plus pending message queue.

use serde::{Deserialize, Serialize};

/// Per-identity state. The identity string itself is the store key and is
/// not duplicated here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Whether broadcasts should be fanned out to this profile
    pub subscribed: bool,
    /// Undelivered messages, insertion-ordered, unbounded
    pub pending_messages: Vec<String>,
}

impl UserProfile {
    /// Create a fresh profile: not subscribed, no pending messages
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a broadcast message to the queue
    pub fn push_message(&mut self, message: String) {
        self.pending_messages.push(message);
    }
}
