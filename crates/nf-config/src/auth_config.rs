use crate::{ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, DEFAULT_DEV_IDENTITY};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    /// HS256 symmetric secret
    pub jwt_secret: Option<String>,
    /// RS256 public key, path relative to the config directory
    pub jwt_public_key_path: Option<String>,
    /// Identity used for every request when auth is disabled (dev mode)
    pub dev_identity: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            jwt_public_key_path: None,
            dev_identity: String::from(DEFAULT_DEV_IDENTITY),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (None, None) => Err(ConfigError::auth(
                "auth.enabled requires auth.jwt_secret (HS256) or auth.jwt_public_key_path (RS256)",
            )),
            (Some(secret), _) if secret.len() < 32 => Err(ConfigError::auth(
                "auth.jwt_secret must be at least 32 bytes",
            )),
            (None, Some(key_path)) if !config_dir.join(key_path).exists() => {
                Err(ConfigError::auth(format!(
                    "auth.jwt_public_key_path not found: {}",
                    config_dir.join(key_path).display()
                )))
            }
            _ => Ok(()),
        }
    }
}
