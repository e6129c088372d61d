mod api;
mod error;
mod health;
mod logger;
mod routes;
mod state;

pub use api::{
    extractors::identity::Identity,
    messages::message_list_response::MessageListResponse,
    notify::deliver_response::DeliverResponse,
    subscription::subscription_response::SubscriptionResponse,
};

use crate::routes::build_router;
use crate::state::AppState;

use nf_auth::JwtValidator;
use nf_core::{MemoryProfileStore, NotificationService};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = nf_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = nf_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting nf-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Create the profile store: one instance, process lifetime, no teardown
    let store = Arc::new(MemoryProfileStore::new());
    let service = NotificationService::new(store, config.notification.retention);
    info!(
        "Notification service initialized (retention: {:?})",
        config.notification.retention
    );

    // Create JWT validator (optional based on auth.enabled)
    let jwt_validator: Option<Arc<JwtValidator>> = if config.auth.enabled {
        let validator = if let Some(ref secret) = config.auth.jwt_secret {
            info!("JWT: HS256 authentication enabled");
            JwtValidator::with_hs256(secret.as_bytes())
        } else if let Some(ref key_path) = config.auth.jwt_public_key_path {
            let config_dir = nf_config::Config::config_dir()?;
            let full_path = config_dir.join(key_path);
            let public_key = std::fs::read_to_string(&full_path).map_err(|e| {
                error::ServerError::JwtKeyFile {
                    path: full_path.display().to_string(),
                    source: e,
                }
            })?;
            info!("JWT: RS256 authentication enabled");
            JwtValidator::with_rs256(&public_key)?
        } else {
            unreachable!("validate() ensures JWT config when auth.enabled")
        };
        Some(Arc::new(validator))
    } else {
        warn!("Authentication DISABLED - running in development mode");
        None
    };

    let shared_secret = config
        .delivery
        .shared_secret
        .clone()
        .expect("validate() ensures delivery.shared_secret is set");

    // Build application state
    let app_state = AppState {
        service: Some(service),
        shared_secret,
        jwt_validator,
        dev_identity: config.auth.dev_identity.clone(),
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server, shut down gracefully on ctrl-c
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
