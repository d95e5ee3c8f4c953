//! Navigation item listing.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use navdeck_core::config::AppConfig;
use navdeck_core::error::AppError;
use navdeck_database::repositories::NavigationItemRepository;

use crate::output::{self, OutputFormat};

/// Arguments for item commands
#[derive(Debug, Args)]
pub struct ItemsArgs {
    /// Item subcommand
    #[command(subcommand)]
    pub command: ItemsCommand,
}

/// Item subcommands
#[derive(Debug, Subcommand)]
pub enum ItemsCommand {
    /// List items in display order
    List {
        /// List the archive instead of the dashboard
        #[arg(long)]
        archived: bool,
    },
}

/// Item display row
#[derive(Debug, Serialize, Tabled)]
struct ItemRow {
    /// ID
    id: i64,
    /// Order
    order: i64,
    /// Title
    title: String,
    /// URL
    url: String,
    /// Category
    category: String,
}

/// Execute item commands
pub async fn execute(
    args: &ItemsArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let db = super::create_db_pool(config).await?;
    let repo = NavigationItemRepository::new(db.pool().clone());

    match &args.command {
        ItemsCommand::List { archived } => {
            let rows: Vec<ItemRow> = repo
                .list(*archived)
                .await?
                .into_iter()
                .map(|item| ItemRow {
                    id: item.id,
                    order: item.sort_order,
                    title: item.title,
                    url: item.url,
                    category: item.category_name.unwrap_or_default(),
                })
                .collect();

            output::print_list(&rows, format);
        }
    }

    db.close().await;
    Ok(())
}
