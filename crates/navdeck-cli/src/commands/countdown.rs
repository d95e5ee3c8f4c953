//! Countdown event listing.

use chrono::Utc;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use navdeck_core::config::AppConfig;
use navdeck_core::error::AppError;
use navdeck_database::repositories::CountdownRepository;
use navdeck_service::countdown::date::parse_target_date;

use crate::output::{self, OutputFormat};

/// Arguments for countdown commands
#[derive(Debug, Args)]
pub struct CountdownArgs {
    /// Countdown subcommand
    #[command(subcommand)]
    pub command: CountdownCommand,
}

/// Countdown subcommands
#[derive(Debug, Subcommand)]
pub enum CountdownCommand {
    /// List events in display order
    List {
        /// Include deleted events
        #[arg(long)]
        all: bool,
    },
}

/// Countdown display row
#[derive(Debug, Serialize, Tabled)]
struct CountdownRow {
    /// ID
    id: i64,
    /// Order
    order: i64,
    /// Title
    title: String,
    /// Target
    target_date: String,
    /// Days left
    days_left: String,
    /// Active
    active: String,
}

/// Execute countdown commands
pub async fn execute(
    args: &CountdownArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let db = super::create_db_pool(config).await?;
    let repo = CountdownRepository::new(db.pool().clone());

    match &args.command {
        CountdownCommand::List { all } => {
            let events = if *all {
                repo.list_all().await?
            } else {
                repo.list_active().await?
            };

            let now = Utc::now();
            let rows: Vec<CountdownRow> = events
                .into_iter()
                .map(|e| CountdownRow {
                    id: e.id,
                    order: e.sort_order,
                    days_left: parse_target_date(&e.target_date)
                        .map(|target| (target - now).num_days().to_string())
                        .unwrap_or_else(|| "?".to_string()),
                    title: e.title,
                    target_date: e.target_date,
                    active: if e.is_active { "✓" } else { "✗" }.to_string(),
                })
                .collect();

            output::print_list(&rows, format);
        }
    }

    db.close().await;
    Ok(())
}
