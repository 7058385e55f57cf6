//! AdminHub Server
//!
//! Main entry point: loads configuration, sets up logging and runs the server.

use tracing_subscriber::{EnvFilter, fmt};

use adminhub_core::config::AppConfig;
use adminhub_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = adminhub_api::app::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `config/`, an optional environment overlay and
/// `ADMINHUB__*` variables.
///
/// `ADMINHUB_CONFIG` points at an explicit file instead.
fn load_configuration() -> Result<AppConfig, AppError> {
    if let Ok(path) = std::env::var("ADMINHUB_CONFIG") {
        return AppConfig::from_file(&path);
    }
    let env = std::env::var("ADMINHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
