use std::str::FromStr;

use serde::{Deserialize, Deserializer};

const DEFAULT_RETENTION_STRING: &str = "retain-on-read";

/// What happens to a profile's message queue when the user reads it.
///
/// The reference behavior never cleared the queue after a read, so
/// `RetainOnRead` is the default; `DrainOnRead` is the opt-in "view = drain"
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetentionPolicy {
    /// Messages stay queued after a read (messages accumulate)
    #[default]
    RetainOnRead,
    /// Reading the queue clears it atomically with the read
    DrainOnRead,
}

impl<'de> Deserialize<'de> for RetentionPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)
            .unwrap_or_else(|_| String::from(DEFAULT_RETENTION_STRING));

        // FromStr never fails, invalid values fall back to the default
        Ok(RetentionPolicy::from_str(&s).unwrap())
    }
}

impl FromStr for RetentionPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "drain-on-read" | "drain" => Ok(RetentionPolicy::DrainOnRead),
            "retain-on-read" | "retain" => Ok(RetentionPolicy::RetainOnRead),
            _ => Ok(RetentionPolicy::RetainOnRead),
        }
    }
}
