mod auth_config;
mod config;
mod delivery_config;
mod error;
mod log_level;
mod logging_config;
mod notification_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use delivery_config::DeliveryConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use notification_config::NotificationConfig;
pub use server_config::ServerConfig;

#[cfg(test)]
mod tests;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;
const DEFAULT_AUTH_ENABLED: bool = false;
const DEFAULT_DEV_IDENTITY: &str = "dev@localhost";
const MIN_SHARED_SECRET_LENGTH: usize = 16;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
