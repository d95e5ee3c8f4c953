//! Database migration command.

use navdeck_core::config::AppConfig;
use navdeck_core::error::AppError;
use navdeck_database::migration::run_migrations;

use crate::output;

/// Apply every pending migration
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    let db = super::create_db_pool(config).await?;

    println!("Running database migrations...");
    run_migrations(db.pool()).await?;
    output::print_success("All migrations applied successfully.");

    db.close().await;
    Ok(())
}
