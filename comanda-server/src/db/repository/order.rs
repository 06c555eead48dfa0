//! Order Repository
//!
//! Point reads/writes on order documents plus the one batch the
//! application demands atomicity for: table completion. Concurrent
//! staff edits to the same order follow the store's last-write-wins
//! merge; there is deliberately no per-field conflict detection.

use super::{BaseRepository, RepoError, RepoResult};
use shared::{Order, OrderStatus};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::orders::CompletionPlan;

const TABLE: &str = "orders";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a new order
    pub async fn create(&self, order: Order) -> RepoResult<Order> {
        let created: Option<Order> = self.base.db().create(TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Every non-completed order across tenants (hub warm-up)
    pub async fn find_all_active(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM orders WHERE status != 'COMPLETED' ORDER BY created_at")
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// One order by domain id
    pub async fn find_by_order_id(&self, tenant_id: &str, order_id: &str) -> RepoResult<Option<Order>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM orders WHERE tenant_id = $tenant AND order_id = $id LIMIT 1")
            .bind(("tenant", tenant_id.to_string()))
            .bind(("id", order_id.to_string()))
            .await?;
        let orders: Vec<Order> = result.take(0)?;
        Ok(orders.into_iter().next())
    }

    /// Single-field status merge
    pub async fn update_status(
        &self,
        tenant_id: &str,
        order_id: &str,
        status: OrderStatus,
    ) -> RepoResult<Order> {
        let mut result = self
            .base
            .db()
            .query("UPDATE orders SET status = $status WHERE tenant_id = $tenant AND order_id = $id RETURN AFTER")
            .bind(("status", status))
            .bind(("tenant", tenant_id.to_string()))
            .bind(("id", order_id.to_string()))
            .await?;
        let orders: Vec<Order> = result.take(0)?;
        orders
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", order_id)))
    }

    /// Single-field urgency merge
    pub async fn set_urgent(
        &self,
        tenant_id: &str,
        order_id: &str,
        is_urgent: bool,
    ) -> RepoResult<Order> {
        let mut result = self
            .base
            .db()
            .query("UPDATE orders SET is_urgent = $urgent WHERE tenant_id = $tenant AND order_id = $id RETURN AFTER")
            .bind(("urgent", is_urgent))
            .bind(("tenant", tenant_id.to_string()))
            .bind(("id", order_id.to_string()))
            .await?;
        let orders: Vec<Order> = result.take(0)?;
        orders
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", order_id)))
    }

    /// Replace the items array (per-item delivered toggles). This is a
    /// whole-field merge: concurrent toggles on the same order follow
    /// last-write-wins, a documented limitation of the platform.
    pub async fn replace_items(&self, order: &Order) -> RepoResult<Order> {
        let mut result = self
            .base
            .db()
            .query("UPDATE orders SET items = $items WHERE tenant_id = $tenant AND order_id = $id RETURN AFTER")
            .bind(("items", order.items.clone()))
            .bind(("tenant", order.tenant_id.clone()))
            .bind(("id", order.order_id.clone()))
            .await?;
        let orders: Vec<Order> = result.take(0)?;
        orders
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", order.order_id)))
    }

    /// Hard delete (staff rejection of a Pending order)
    pub async fn delete(&self, tenant_id: &str, order_id: &str) -> RepoResult<bool> {
        self.base
            .db()
            .query("DELETE FROM orders WHERE tenant_id = $tenant AND order_id = $id")
            .bind(("tenant", tenant_id.to_string()))
            .bind(("id", order_id.to_string()))
            .await?
            .check()?;
        Ok(true)
    }

    /// Rolling window of completed orders, newest first
    pub async fn recent_completed(&self, tenant_id: &str, limit: usize) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM orders WHERE tenant_id = $tenant AND status = 'COMPLETED' ORDER BY created_at DESC LIMIT $limit")
            .bind(("tenant", tenant_id.to_string()))
            .bind(("limit", limit))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Execute a table-completion plan as one transaction: all grouped
    /// orders complete, every ingredient decrement applies and the
    /// table hint flips to needs-cleaning, or nothing changes at all.
    pub async fn complete_batch(&self, tenant_id: &str, plan: &CompletionPlan) -> RepoResult<()> {
        if plan.is_empty() {
            return Err(RepoError::Validation(
                "No orders grouped under this table".to_string(),
            ));
        }

        let mut statements = String::from("BEGIN TRANSACTION;\n");
        statements.push_str(
            "UPDATE orders SET status = 'COMPLETED' WHERE tenant_id = $tenant AND order_id IN $order_ids;\n",
        );
        for i in 0..plan.stock_decrements.len() {
            statements.push_str(&format!(
                "UPDATE ingredient SET stock -= $qty_{i} WHERE tenant_id = $tenant AND ingredient_id = $ing_{i};\n"
            ));
        }
        if plan.table_id.is_some() {
            statements.push_str(
                "UPDATE floor_table SET hint = 'NEEDS_CLEANING' WHERE tenant_id = $tenant AND table_id = $table_id;\n",
            );
        }
        statements.push_str("COMMIT TRANSACTION;");

        let mut query = self
            .base
            .db()
            .query(statements)
            .bind(("tenant", tenant_id.to_string()))
            .bind(("order_ids", plan.order_ids.clone()));
        if let Some(table_id) = &plan.table_id {
            query = query.bind(("table_id", table_id.clone()));
        }
        for (i, decrement) in plan.stock_decrements.iter().enumerate() {
            query = query
                .bind((format!("ing_{i}"), decrement.ingredient_id.clone()))
                .bind((format!("qty_{i}"), decrement.quantity));
        }

        query.await?.check()?;
        Ok(())
    }
}
