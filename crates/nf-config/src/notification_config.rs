use nf_core::RetentionPolicy;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// What a read does to the message queue:
    /// "retain-on-read" (default, messages accumulate) or "drain-on-read"
    pub retention: RetentionPolicy,
}
