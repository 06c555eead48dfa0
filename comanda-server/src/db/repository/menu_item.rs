//! Menu Item Repository

use super::{BaseRepository, RepoError, RepoResult};
use shared::models::{MenuItem, MenuItemCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "menu_item";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self, tenant_id: &str) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE tenant_id = $tenant ORDER BY name")
            .bind(("tenant", tenant_id.to_string()))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Batch lookup by domain ids (recipe resolution)
    pub async fn find_by_ids(&self, tenant_id: &str, ids: Vec<String>) -> RepoResult<Vec<MenuItem>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE tenant_id = $tenant AND menu_item_id IN $ids")
            .bind(("tenant", tenant_id.to_string()))
            .bind(("ids", ids))
            .await?
            .take(0)?;
        Ok(items)
    }

    pub async fn create(
        &self,
        tenant_id: &str,
        menu_item_id: String,
        data: MenuItemCreate,
    ) -> RepoResult<MenuItem> {
        if data.name.trim().is_empty() {
            return Err(RepoError::Validation("Name must not be empty".to_string()));
        }
        if !data.price.is_finite() || data.price < 0.0 {
            return Err(RepoError::Validation("Invalid price".to_string()));
        }
        let item = MenuItem {
            menu_item_id,
            tenant_id: tenant_id.to_string(),
            name: data.name,
            price: data.price,
            recipe: data.recipe,
            is_available: true,
        };
        let created: Option<MenuItem> = self.base.db().create(TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }
}
