//! Ingredient Repository
//!
//! Stock decrements happen inside the order-completion batch (see
//! `OrderRepository::complete_batch`) using in-place `-=` updates;
//! this repository only covers admin CRUD and reads.

use super::{BaseRepository, RepoError, RepoResult};
use shared::models::{Ingredient, IngredientCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "ingredient";

#[derive(Clone)]
pub struct IngredientRepository {
    base: BaseRepository,
}

impl IngredientRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self, tenant_id: &str) -> RepoResult<Vec<Ingredient>> {
        let ingredients: Vec<Ingredient> = self
            .base
            .db()
            .query("SELECT * FROM ingredient WHERE tenant_id = $tenant ORDER BY name")
            .bind(("tenant", tenant_id.to_string()))
            .await?
            .take(0)?;
        Ok(ingredients)
    }

    pub async fn create(
        &self,
        tenant_id: &str,
        ingredient_id: String,
        data: IngredientCreate,
    ) -> RepoResult<Ingredient> {
        if data.name.trim().is_empty() {
            return Err(RepoError::Validation("Name must not be empty".to_string()));
        }
        let ingredient = Ingredient {
            ingredient_id,
            tenant_id: tenant_id.to_string(),
            name: data.name,
            unit: data.unit,
            stock: data.stock,
        };
        let created: Option<Ingredient> =
            self.base.db().create(TABLE).content(ingredient).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create ingredient".to_string()))
    }

    /// Manual stock adjustment, applied as an in-place increment
    pub async fn adjust_stock(
        &self,
        tenant_id: &str,
        ingredient_id: &str,
        delta: f64,
    ) -> RepoResult<Ingredient> {
        let mut result = self
            .base
            .db()
            .query("UPDATE ingredient SET stock += $delta WHERE tenant_id = $tenant AND ingredient_id = $id RETURN AFTER")
            .bind(("delta", delta))
            .bind(("tenant", tenant_id.to_string()))
            .bind(("id", ingredient_id.to_string()))
            .await?;
        let ingredients: Vec<Ingredient> = result.take(0)?;
        ingredients
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Ingredient {} not found", ingredient_id)))
    }
}
