//! Database migrations.

use adminhub_core::error::AppError;

use crate::output;

/// Run all pending migrations
pub async fn execute(config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let db = super::connect_database(&config).await?;

    println!("Running database migrations...");
    adminhub_database::migration::run_migrations(db.pool()).await?;
    db.close().await;
    output::print_success("All migrations applied successfully.");
    Ok(())
}
