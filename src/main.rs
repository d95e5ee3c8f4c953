//! Navdeck Server: bookmark and countdown dashboard behind one shared secret.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use navdeck_api::{AppState, build_app};
use navdeck_auth::SessionSweeper;
use navdeck_core::config::AppConfig;
use navdeck_core::error::AppError;
use navdeck_core::traits::SystemClock;
use navdeck_database::DatabasePool;
use navdeck_database::migration::run_migrations;

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

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    match std::env::var("NAVDECK_CONFIG") {
        Ok(path) => AppConfig::load_file(&path),
        Err(_) => {
            let env = std::env::var("NAVDECK_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)
        }
    }
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
                .with_thread_ids(true)
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

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Navdeck v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;
    run_migrations(db.pool()).await?;

    // ── Step 2: Wire state ───────────────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let sweep_interval = config.session.sweep_interval()?;
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    if !config.auth.require_auth_on_mutation {
        tracing::warn!("auth.require_auth_on_mutation is off; mutations need no credential");
    }
    if config.auth.allow_unauthenticated_reset {
        tracing::warn!("auth.allow_unauthenticated_reset is on; anyone can remove the secret");
    }

    let state = AppState::build(config, db.clone(), Arc::new(SystemClock))?;
    let sessions = Arc::clone(&state.sessions);

    // ── Step 3: Background session sweeper ───────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper = SessionSweeper::start(Arc::clone(&sessions), sweep_interval, shutdown_rx);

    // ── Step 4: Bind and serve ───────────────────────────────────
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Navdeck server listening on {addr}");

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // ── Step 5: Stop background work ─────────────────────────────
    if tokio::time::timeout(grace, sweeper).await.is_err() {
        tracing::warn!("Session sweeper did not stop within {}s", grace.as_secs());
    }
    sessions.shutdown();
    db.close().await;

    tracing::info!("Navdeck server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
