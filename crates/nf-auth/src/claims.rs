use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

const MAX_IDENTITY_LENGTH: usize = 256;

/// JWT claims accepted by the relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (fallback identity key)
    pub sub: String,
    /// User principal name; the preferred identity key when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upn: Option<String>,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Optional: user roles, unused by the relay but carried for logging
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Claims {
    /// The identity key profiles are stored under: upn when present, else sub
    pub fn identity(&self) -> &str {
        self.upn.as_deref().unwrap_or(&self.sub)
    }

    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let identity = self.identity();
        if identity.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "upn".to_string(),
                message: "identity cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if identity.len() > MAX_IDENTITY_LENGTH {
            return Err(AuthError::InvalidClaim {
                claim: "upn".to_string(),
                message: "identity exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
