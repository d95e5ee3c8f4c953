//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use navdeck_auth::{AuthGate, SecretPolicy, SecretStore, SessionRegistry};
use navdeck_core::config::AppConfig;
use navdeck_core::result::AppResult;
use navdeck_core::traits::Clock;
use navdeck_database::DatabasePool;
use navdeck_database::repositories::{
    CountdownRepository, NavigationItemRepository, SecretRepository, SortOrderRepository,
};
use navdeck_service::{CountdownService, ItemService, ReorderCoordinator};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// SQLite connection pool
    pub db: DatabasePool,

    // ── Auth ─────────────────────────────────────────────────
    /// Shared secret lifecycle
    pub secret_store: Arc<SecretStore>,
    /// Issued session tokens
    pub sessions: Arc<SessionRegistry>,
    /// Per-request credential check
    pub gate: Arc<AuthGate>,

    // ── Services ─────────────────────────────────────────────
    /// Navigation items
    pub item_service: Arc<ItemService>,
    /// Countdown events
    pub countdown_service: Arc<CountdownService>,
    /// Batch reordering
    pub reorder: Arc<ReorderCoordinator>,
}

impl AppState {
    /// Wires repositories, auth components and services over one pool.
    pub fn build(config: AppConfig, db: DatabasePool, clock: Arc<dyn Clock>) -> AppResult<Self> {
        let pool = db.pool().clone();

        let secret_repo = Arc::new(SecretRepository::new(pool.clone()));
        let item_repo = Arc::new(NavigationItemRepository::new(pool.clone()));
        let countdown_repo = Arc::new(CountdownRepository::new(pool.clone()));
        let order_repo = Arc::new(SortOrderRepository::new(pool));

        let secret_store = Arc::new(SecretStore::new(
            secret_repo,
            SecretPolicy::new(&config.auth),
        ));
        let sessions = Arc::new(SessionRegistry::from_config(&config.session, clock)?);
        let gate = Arc::new(AuthGate::new(
            Arc::clone(&secret_store),
            Arc::clone(&sessions),
            &config.auth,
        ));

        Ok(Self {
            config: Arc::new(config),
            db,
            secret_store,
            sessions,
            gate,
            item_service: Arc::new(ItemService::new(item_repo)),
            countdown_service: Arc::new(CountdownService::new(countdown_repo)),
            reorder: Arc::new(ReorderCoordinator::new(order_repo)),
        })
    }
}
