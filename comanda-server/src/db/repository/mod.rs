//! Repository Module
//!
//! CRUD and batch operations per collection. Documents are addressed
//! by their domain id fields (`order_id`, `table_id`, ...) and always
//! scoped by `tenant_id`; the engine's record ids are left to the
//! engine.

pub mod floor_table;
pub mod ingredient;
pub mod loyalty;
pub mod menu_item;
pub mod order;
pub mod promotion;
pub mod store;

// Re-exports
pub use floor_table::FloorTableRepository;
pub use ingredient::IngredientRepository;
pub use loyalty::LoyaltyRepository;
pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;
pub use promotion::PromotionRepository;
pub use store::StoreRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
