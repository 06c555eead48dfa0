use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::auth::JwtService;
use crate::core::{ChangeEvent, Config};
use crate::db::repository::OrderRepository;
use crate::orders::OrderHub;

/// Server state - shared handle to every service
///
/// Cloning is shallow; all members are cheap reference-counted handles.
///
/// | Field | Description |
/// |-------|-------------|
/// | config | Immutable configuration |
/// | db | Embedded SurrealDB instance |
/// | hub | Active-order cache + change broadcast |
/// | jwt_service | Staff token verification |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub hub: Arc<OrderHub>,
    pub jwt_service: Arc<JwtService>,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("db", &"<Surreal<Db>>")
            .finish()
    }
}

impl ServerState {
    /// Initialize server state
    ///
    /// 1. Ensure the work directory structure exists
    /// 2. Open the embedded database
    /// 3. Warm the order hub with the persisted active set
    ///
    /// # Panics
    ///
    /// Panics when the database cannot be opened; the server is useless
    /// without it.
    pub async fn initialize(config: &Config) -> Self {
        let db_dir = config.database_dir();
        std::fs::create_dir_all(&db_dir).expect("Failed to create database directory");
        std::fs::create_dir_all(config.log_dir()).expect("Failed to create log directory");

        let db = Surreal::new::<RocksDb>(db_dir.join("comanda.db"))
            .await
            .expect("Failed to open database");
        db.use_ns("comanda")
            .use_db("comanda")
            .await
            .expect("Failed to select namespace");
        tracing::info!("Database opened at {}", db_dir.display());

        let state = Self {
            config: config.clone(),
            db,
            hub: Arc::new(OrderHub::with_recent_window(config.recent_completed_limit)),
            jwt_service: Arc::new(JwtService::new(config.jwt.clone())),
        };
        state.warm_hub().await;
        state
    }

    /// In-memory state for tests and ephemeral runs: no files on disk
    pub async fn in_memory(config: Config) -> Self {
        let db = Surreal::new::<surrealdb::engine::local::Mem>(())
            .await
            .expect("Failed to open in-memory database");
        db.use_ns("comanda")
            .use_db("comanda")
            .await
            .expect("Failed to select namespace");
        Self {
            db,
            hub: Arc::new(OrderHub::with_recent_window(config.recent_completed_limit)),
            jwt_service: Arc::new(JwtService::new(config.jwt.clone())),
            config,
        }
    }

    /// Load the persisted active orders into the hub on startup
    async fn warm_hub(&self) {
        let repo = OrderRepository::new(self.db.clone());
        match repo.find_all_active().await {
            Ok(orders) => {
                let count = orders.len();
                self.hub.load(orders);
                tracing::info!(count, "Order hub warmed from store");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to warm order hub; starting empty");
            }
        }
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// Publish a change notification to all subscribers
    pub fn publish_change(&self, event: ChangeEvent) {
        self.hub.publish(event);
    }
}
