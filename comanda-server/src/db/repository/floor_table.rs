//! Floor Plan Table Repository

use super::{BaseRepository, RepoError, RepoResult};
use shared::models::{FloorPlanTable, FloorPlanTableCreate, FloorPlanTableUpdate, TableHint};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "floor_table";

#[derive(Clone)]
pub struct FloorTableRepository {
    base: BaseRepository,
}

impl FloorTableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All tables of a tenant, label order
    pub async fn find_all(&self, tenant_id: &str) -> RepoResult<Vec<FloorPlanTable>> {
        let tables: Vec<FloorPlanTable> = self
            .base
            .db()
            .query("SELECT * FROM floor_table WHERE tenant_id = $tenant ORDER BY label")
            .bind(("tenant", tenant_id.to_string()))
            .await?
            .take(0)?;
        Ok(tables)
    }

    pub async fn find_by_table_id(
        &self,
        tenant_id: &str,
        table_id: &str,
    ) -> RepoResult<Option<FloorPlanTable>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM floor_table WHERE tenant_id = $tenant AND table_id = $id LIMIT 1")
            .bind(("tenant", tenant_id.to_string()))
            .bind(("id", table_id.to_string()))
            .await?;
        let tables: Vec<FloorPlanTable> = result.take(0)?;
        Ok(tables.into_iter().next())
    }

    /// Label lookup uses the same normalization as the order join
    async fn find_by_label(
        &self,
        tenant_id: &str,
        label: &str,
    ) -> RepoResult<Option<FloorPlanTable>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM floor_table WHERE tenant_id = $tenant \
                 AND string::uppercase(string::trim(label)) = string::uppercase(string::trim($label)) LIMIT 1",
            )
            .bind(("tenant", tenant_id.to_string()))
            .bind(("label", label.to_string()))
            .await?;
        let tables: Vec<FloorPlanTable> = result.take(0)?;
        Ok(tables.into_iter().next())
    }

    /// Create a table. Duplicate labels are rejected: the plate-number
    /// join is a string match, and two tables with the same label
    /// would silently split each other's orders.
    pub async fn create(
        &self,
        tenant_id: &str,
        table_id: String,
        data: FloorPlanTableCreate,
    ) -> RepoResult<FloorPlanTable> {
        if data.label.trim().is_empty() {
            return Err(RepoError::Validation("Label must not be empty".to_string()));
        }
        if self.find_by_label(tenant_id, &data.label).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Table '{}' already exists",
                data.label
            )));
        }

        let table = FloorPlanTable {
            table_id,
            tenant_id: tenant_id.to_string(),
            label: data.label,
            x: data.x,
            y: data.y,
            width: data.width,
            height: data.height,
            rotation: data.rotation,
            shape: data.shape,
            hint: TableHint::Available,
        };

        let created: Option<FloorPlanTable> =
            self.base.db().create(TABLE).content(table).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create table".to_string()))
    }

    /// Update geometry/label. Whole-document merge, last write wins.
    pub async fn update(
        &self,
        tenant_id: &str,
        table_id: &str,
        data: FloorPlanTableUpdate,
    ) -> RepoResult<FloorPlanTable> {
        let existing = self
            .find_by_table_id(tenant_id, table_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Table {} not found", table_id)))?;

        if let Some(label) = &data.label
            && !shared::PlateKey::matches(label, &existing.label)
            && self.find_by_label(tenant_id, label).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Table '{}' already exists",
                label
            )));
        }

        let updated = FloorPlanTable {
            table_id: existing.table_id.clone(),
            tenant_id: existing.tenant_id.clone(),
            label: data.label.unwrap_or(existing.label),
            x: data.x.unwrap_or(existing.x),
            y: data.y.unwrap_or(existing.y),
            width: data.width.unwrap_or(existing.width),
            height: data.height.unwrap_or(existing.height),
            rotation: data.rotation.unwrap_or(existing.rotation),
            shape: data.shape.unwrap_or(existing.shape),
            hint: existing.hint,
        };

        let mut result = self
            .base
            .db()
            .query("UPDATE floor_table CONTENT $table WHERE tenant_id = $tenant AND table_id = $id RETURN AFTER")
            .bind(("table", updated))
            .bind(("tenant", tenant_id.to_string()))
            .bind(("id", table_id.to_string()))
            .await?;
        let tables: Vec<FloorPlanTable> = result.take(0)?;
        tables
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Table {} not found", table_id)))
    }

    /// Persisted hint merge (seated / needs_cleaning / available)
    pub async fn set_hint(
        &self,
        tenant_id: &str,
        table_id: &str,
        hint: TableHint,
    ) -> RepoResult<FloorPlanTable> {
        let mut result = self
            .base
            .db()
            .query("UPDATE floor_table SET hint = $hint WHERE tenant_id = $tenant AND table_id = $id RETURN AFTER")
            .bind(("hint", hint))
            .bind(("tenant", tenant_id.to_string()))
            .bind(("id", table_id.to_string()))
            .await?;
        let tables: Vec<FloorPlanTable> = result.take(0)?;
        tables
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Table {} not found", table_id)))
    }

    /// Hard delete
    pub async fn delete(&self, tenant_id: &str, table_id: &str) -> RepoResult<bool> {
        self.base
            .db()
            .query("DELETE FROM floor_table WHERE tenant_id = $tenant AND table_id = $id")
            .bind(("tenant", tenant_id.to_string()))
            .bind(("id", table_id.to_string()))
            .await?
            .check()?;
        Ok(true)
    }
}
