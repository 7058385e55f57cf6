//! CLI command definitions and dispatch.

pub mod admin;
pub mod migrate;
pub mod permissions;
pub mod serve;

use clap::{Parser, Subcommand};

use adminhub_core::config::{AppConfig, DatabaseProvider};
use adminhub_core::error::AppError;
use adminhub_database::DatabasePool;

use crate::output::OutputFormat;

/// AdminHub administrative console
#[derive(Debug, Parser)]
#[command(name = "adminhub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the AdminHub server
    Serve(serve::ServeArgs),
    /// Apply pending database migrations
    Migrate,
    /// Administrator account management
    Admin(admin::AdminArgs),
    /// Permission catalog
    Permissions(permissions::PermissionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate => migrate::execute(&self.config).await,
            Commands::Admin(args) => admin::execute(args, &self.config).await,
            Commands::Permissions(args) => permissions::execute(args, self.format),
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::from_file(config_path)
}

/// Helper: connect to PostgreSQL; the in-memory provider has nothing to administer.
pub async fn connect_database(config: &AppConfig) -> Result<DatabasePool, AppError> {
    if config.database.provider != DatabaseProvider::Postgres {
        return Err(AppError::configuration(
            "This command requires database.provider = \"postgres\"",
        ));
    }
    DatabasePool::connect(&config.database).await
}
