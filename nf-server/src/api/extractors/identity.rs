//! Axum extractors for REST API authentication

use crate::state::AppState;

use std::convert::Infallible;
use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Resolves the caller's identity key.
///
/// When auth is enabled, the identity comes from a validated
/// `Authorization: Bearer` JWT (upn claim, falling back to sub). Any failure
/// there resolves to `Identity(None)` rather than a rejection: an
/// unauthenticated caller sees default responses, never a 401.
///
/// When auth is disabled (dev mode), the `X-Identity` header is honored,
/// falling back to the configured dev identity.
pub struct Identity(pub Option<String>);

impl Identity {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let headers = &parts.headers;

            let Some(validator) = &state.jwt_validator else {
                // Dev mode: X-Identity header, else the configured identity
                #[allow(clippy::collapsible_if)]
                if let Some(header_value) = headers.get("X-Identity") {
                    if let Ok(identity) = header_value.to_str() {
                        if !identity.is_empty() {
                            log::debug!("Using identity from X-Identity header: {}", identity);
                            return Ok(Identity(Some(identity.to_string())));
                        }
                    }
                }

                log::debug!("Using dev identity: {}", state.dev_identity);
                return Ok(Identity(Some(state.dev_identity.clone())));
            };

            let Some(header_value) = headers.get(axum::http::header::AUTHORIZATION) else {
                log::debug!("No Authorization header, treating caller as anonymous");
                return Ok(Identity(None));
            };

            let Ok(header) = header_value.to_str() else {
                log::debug!("Non-UTF8 Authorization header, treating caller as anonymous");
                return Ok(Identity(None));
            };

            let Some(token) = header.strip_prefix("Bearer ") else {
                log::debug!("Unsupported authorization scheme, treating caller as anonymous");
                return Ok(Identity(None));
            };

            match validator.validate(token) {
                Ok(claims) => {
                    let identity = claims.identity().to_string();
                    log::debug!("Resolved identity {} from bearer token", identity);
                    Ok(Identity(Some(identity)))
                }
                Err(e) => {
                    log::debug!("Bearer token rejected ({}), treating caller as anonymous", e);
                    Ok(Identity(None))
                }
            }
        }
    }
}
