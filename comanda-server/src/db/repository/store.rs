//! Store Repository

use super::{BaseRepository, RepoError, RepoResult};
use shared::models::{Store, StoreCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "store";

#[derive(Clone)]
pub struct StoreRepository {
    base: BaseRepository,
}

impl StoreRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self, tenant_id: &str) -> RepoResult<Vec<Store>> {
        let stores: Vec<Store> = self
            .base
            .db()
            .query("SELECT * FROM store WHERE tenant_id = $tenant ORDER BY name")
            .bind(("tenant", tenant_id.to_string()))
            .await?
            .take(0)?;
        Ok(stores)
    }

    pub async fn create(
        &self,
        tenant_id: &str,
        store_id: String,
        data: StoreCreate,
    ) -> RepoResult<Store> {
        if data.name.trim().is_empty() {
            return Err(RepoError::Validation("Name must not be empty".to_string()));
        }
        let store = Store {
            store_id,
            tenant_id: tenant_id.to_string(),
            name: data.name,
        };
        let created: Option<Store> = self.base.db().create(TABLE).content(store).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create store".to_string()))
    }
}
