use crate::{ConfigError, ConfigErrorResult, MIN_SHARED_SECRET_LENGTH};

use serde::Deserialize;

/// Trusted-caller delivery endpoint settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    /// Shared secret the `$secret` header must match. Required.
    pub shared_secret: Option<String>,
}

impl DeliveryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.shared_secret {
            None => Err(ConfigError::delivery(
                "delivery.shared_secret is required (set NF_DELIVERY_SHARED_SECRET)",
            )),
            Some(secret) if secret.len() < MIN_SHARED_SECRET_LENGTH => {
                Err(ConfigError::delivery(format!(
                    "delivery.shared_secret must be at least {} bytes",
                    MIN_SHARED_SECRET_LENGTH
                )))
            }
            Some(_) => Ok(()),
        }
    }
}
