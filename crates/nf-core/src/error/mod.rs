use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Store error: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a store error
    #[track_caller]
    pub fn store<S: Into<String>>(message: S) -> Self {
        CoreError::Store {
            message: message.into(),
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
