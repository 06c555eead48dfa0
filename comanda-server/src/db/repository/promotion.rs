//! Promotion Repository

use super::{BaseRepository, RepoError, RepoResult};
use shared::models::{Promotion, PromotionCreate, PromotionUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "promotion";

#[derive(Clone)]
pub struct PromotionRepository {
    base: BaseRepository,
}

impl PromotionRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self, tenant_id: &str) -> RepoResult<Vec<Promotion>> {
        let promotions: Vec<Promotion> = self
            .base
            .db()
            .query("SELECT * FROM promotion WHERE tenant_id = $tenant ORDER BY name")
            .bind(("tenant", tenant_id.to_string()))
            .await?
            .take(0)?;
        Ok(promotions)
    }

    /// Active promotions in stable creation order. Evaluation tie-break
    /// ("first encountered wins") depends on this ordering.
    pub async fn find_active(&self, tenant_id: &str) -> RepoResult<Vec<Promotion>> {
        let promotions: Vec<Promotion> = self
            .base
            .db()
            .query("SELECT * FROM promotion WHERE tenant_id = $tenant AND is_active = true ORDER BY promotion_id")
            .bind(("tenant", tenant_id.to_string()))
            .await?
            .take(0)?;
        Ok(promotions)
    }

    pub async fn find_by_promotion_id(
        &self,
        tenant_id: &str,
        promotion_id: &str,
    ) -> RepoResult<Option<Promotion>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM promotion WHERE tenant_id = $tenant AND promotion_id = $id LIMIT 1")
            .bind(("tenant", tenant_id.to_string()))
            .bind(("id", promotion_id.to_string()))
            .await?;
        let promotions: Vec<Promotion> = result.take(0)?;
        Ok(promotions.into_iter().next())
    }

    pub async fn create(
        &self,
        tenant_id: &str,
        promotion_id: String,
        data: PromotionCreate,
    ) -> RepoResult<Promotion> {
        if data.name.trim().is_empty() {
            return Err(RepoError::Validation("Name must not be empty".to_string()));
        }
        let promotion = Promotion {
            promotion_id,
            tenant_id: tenant_id.to_string(),
            name: data.name,
            is_active: true,
            kind: data.kind,
        };
        let created: Option<Promotion> = self.base.db().create(TABLE).content(promotion).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create promotion".to_string()))
    }

    /// Whole-document merge, last write wins
    pub async fn update(
        &self,
        tenant_id: &str,
        promotion_id: &str,
        data: PromotionUpdate,
    ) -> RepoResult<Promotion> {
        let existing = self
            .find_by_promotion_id(tenant_id, promotion_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Promotion {} not found", promotion_id)))?;

        let updated = Promotion {
            promotion_id: existing.promotion_id.clone(),
            tenant_id: existing.tenant_id.clone(),
            name: data.name.unwrap_or(existing.name),
            is_active: existing.is_active,
            kind: data.kind.unwrap_or(existing.kind),
        };

        let mut result = self
            .base
            .db()
            .query("UPDATE promotion CONTENT $promotion WHERE tenant_id = $tenant AND promotion_id = $id RETURN AFTER")
            .bind(("promotion", updated))
            .bind(("tenant", tenant_id.to_string()))
            .bind(("id", promotion_id.to_string()))
            .await?;
        let promotions: Vec<Promotion> = result.take(0)?;
        promotions
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Promotion {} not found", promotion_id)))
    }

    /// Activation gate merge; inactive promotions leave all evaluation
    pub async fn set_active(
        &self,
        tenant_id: &str,
        promotion_id: &str,
        is_active: bool,
    ) -> RepoResult<Promotion> {
        let mut result = self
            .base
            .db()
            .query("UPDATE promotion SET is_active = $active WHERE tenant_id = $tenant AND promotion_id = $id RETURN AFTER")
            .bind(("active", is_active))
            .bind(("tenant", tenant_id.to_string()))
            .bind(("id", promotion_id.to_string()))
            .await?;
        let promotions: Vec<Promotion> = result.take(0)?;
        promotions
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Promotion {} not found", promotion_id)))
    }
}
