//! Activity signup service binary.
//!
//! Wires together configuration, the activity registry, and the HTTP
//! adapter, then serves until `Ctrl-C`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `signup-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Build the activity registry from the seed file or built-in catalogue
//! 4. Serve the HTTP API

mod error;

use std::path::Path;
use std::sync::Arc;

use signup_api::{AppState, ServerConfig};
use signup_core::config::LoggingConfig;
use signup_core::{seed, ActivityRegistry, SignupConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::ServerBinError;

const CONFIG_PATH: &str = "signup-config.yaml";

/// Application entry point for the signup server.
///
/// # Errors
///
/// Returns an error if configuration, seeding, or the server fails.
#[tokio::main]
async fn main() -> Result<(), ServerBinError> {
    // 1. Load configuration.
    let config = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);
    info!("signup-server starting");
    info!(
        host = config.server.host,
        port = config.server.port,
        seed_path = ?config.seed.path,
        "Configuration loaded"
    );

    // 3. Build the registry.
    let registry = build_registry(&config)?;
    info!(activity_count = registry.len(), "Activity registry seeded");

    // 4. Serve.
    let server_config = ServerConfig::from(&config.server);
    let state = Arc::new(AppState::new(registry));
    signup_api::start_server(&server_config, state).await?;

    info!("signup-server exited cleanly");
    Ok(())
}

/// Load configuration from `signup-config.yaml`.
///
/// If the file does not exist, defaults are used with environment
/// overrides applied.
fn load_config() -> Result<SignupConfig, ServerBinError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        Ok(SignupConfig::from_file(config_path)?)
    } else {
        let mut config = SignupConfig::default();
        config.apply_env_overrides();
        Ok(config)
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}

/// Build the activity registry from the configured seed source.
fn build_registry(config: &SignupConfig) -> Result<ActivityRegistry, ServerBinError> {
    match &config.seed.path {
        Some(path) => {
            let activities = seed::load_seed_file(path)?;
            info!(path = %path.display(), "Loaded seed file");
            Ok(ActivityRegistry::from_activities(activities)?)
        }
        None => {
            info!("No seed file configured, using built-in catalogue");
            Ok(ActivityRegistry::seeded())
        }
    }
}
