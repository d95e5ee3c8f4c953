//! CLI command definitions and dispatch.

pub mod countdown;
pub mod items;
pub mod migrate;
pub mod secret;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use navdeck_core::config::AppConfig;
use navdeck_core::error::AppError;
use navdeck_database::DatabasePool;

/// Navdeck: bookmark and countdown dashboard
#[derive(Debug, Parser)]
#[command(name = "navdeck", version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file. Defaults to `config/default.toml`
    /// layered with `config/$NAVDECK_ENV.toml`.
    #[arg(short, long)]
    pub config: Option<String>,

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
    /// Apply pending database migrations
    Migrate,
    /// Shared secret management
    Secret(secret::SecretArgs),
    /// Navigation item listing
    Items(items::ItemsArgs),
    /// Countdown event listing
    Countdown(countdown::CountdownArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = load_config(self.config.as_deref())?;

        match &self.command {
            Commands::Migrate => migrate::execute(&config).await,
            Commands::Secret(args) => secret::execute(args, &config, self.format).await,
            Commands::Items(args) => items::execute(args, &config, self.format).await,
            Commands::Countdown(args) => countdown::execute(args, &config, self.format).await,
        }
    }
}

/// Helper: load configuration from an explicit file or the default layers
pub fn load_config(path: Option<&str>) -> Result<AppConfig, AppError> {
    match path {
        Some(path) => AppConfig::load_file(path),
        None => {
            let env = std::env::var("NAVDECK_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)
        }
    }
}

/// Helper: create database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}
