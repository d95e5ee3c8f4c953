//! Shared secret management commands.
//!
//! `reset` is the recovery path when the secret is lost: it runs with direct
//! database access and needs no credential.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;

use navdeck_auth::{SecretPolicy, SecretStore};
use navdeck_core::config::AppConfig;
use navdeck_core::error::AppError;
use navdeck_database::repositories::SecretRepository;

use crate::output::{self, OutputFormat};

/// Arguments for secret commands
#[derive(Debug, Args)]
pub struct SecretArgs {
    /// Secret subcommand
    #[command(subcommand)]
    pub command: SecretCommand,
}

/// Secret subcommands
#[derive(Debug, Subcommand)]
pub enum SecretCommand {
    /// Show whether a secret is configured
    Status,
    /// Delete every stored secret, reopening first-run setup
    Reset {
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Secret status as reported by `secret status`
#[derive(Debug, Serialize)]
struct SecretStatus {
    configured: bool,
    active_since: Option<String>,
    stored_records: i64,
}

/// Execute secret commands
pub async fn execute(
    args: &SecretArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let db = super::create_db_pool(config).await?;
    let repo = Arc::new(SecretRepository::new(db.pool().clone()));

    match &args.command {
        SecretCommand::Status => {
            let active = repo.find_active().await?;
            let status = SecretStatus {
                configured: active.is_some(),
                active_since: active
                    .map(|r| r.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
                stored_records: repo.count_all().await?,
            };

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&status)?),
                OutputFormat::Table => {
                    println!("Secret key:");
                    output::print_kv(
                        "Configured",
                        if status.configured { "yes" } else { "no" },
                    );
                    output::print_kv(
                        "Active since",
                        status.active_since.as_deref().unwrap_or("-"),
                    );
                    output::print_kv("Stored records", &status.stored_records.to_string());
                }
            }
        }
        SecretCommand::Reset { force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(
                        "Delete the secret key? The dashboard stays open until a new one is set.",
                    )
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            let store = SecretStore::new(repo, SecretPolicy::new(&config.auth));
            store.reset().await?;
            output::print_success("Secret key removed.");
            output::print_warning(
                "Sessions held by a running server stay valid until it restarts.",
            );
        }
    }

    db.close().await;
    Ok(())
}
