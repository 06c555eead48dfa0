//! Loyalty Progress Repository
//!
//! Loyalty records are only ever touched through atomic operations:
//! accrual is a single create-or-increment batch and redemption is a
//! guarded in-place decrement. No read-modify-write, so concurrent
//! checkouts from the same customer cannot lose updates.

use super::{BaseRepository, RepoResult};
use shared::models::CustomerLoyaltyProgress;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::promotions::LoyaltyAccrual;

#[derive(Clone)]
pub struct LoyaltyRepository {
    base: BaseRepository,
}

impl LoyaltyRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Progress for one customer, if any exists yet
    pub async fn find_by_phone(
        &self,
        tenant_id: &str,
        phone_number: &str,
    ) -> RepoResult<Option<CustomerLoyaltyProgress>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM loyalty_progress WHERE tenant_id = $tenant AND phone_number = $phone LIMIT 1")
            .bind(("tenant", tenant_id.to_string()))
            .bind(("phone", phone_number.to_string()))
            .await?;
        let records: Vec<CustomerLoyaltyProgress> = result.take(0)?;
        Ok(records.into_iter().next())
    }

    /// Apply one checkout's accrual as a single atomic batch. Creates
    /// the record lazily with the increments as initial values.
    pub async fn accrue(
        &self,
        tenant_id: &str,
        phone_number: &str,
        accrual: &LoyaltyAccrual,
    ) -> RepoResult<()> {
        if accrual.is_empty() {
            return Ok(());
        }

        let mut statements = String::from("BEGIN TRANSACTION;\n");
        statements.push_str(
            "UPSERT loyalty_progress SET tenant_id = $tenant, phone_number = $phone, \
             points += $points, visit_counts = visit_counts ?? {} \
             WHERE tenant_id = $tenant AND phone_number = $phone;\n",
        );
        for i in 0..accrual.visit_promotion_ids.len() {
            statements.push_str(&format!(
                "UPDATE loyalty_progress SET visit_counts[$promo_{i}] += 1 \
                 WHERE tenant_id = $tenant AND phone_number = $phone;\n"
            ));
        }
        statements.push_str("COMMIT TRANSACTION;");

        let mut query = self
            .base
            .db()
            .query(statements)
            .bind(("tenant", tenant_id.to_string()))
            .bind(("phone", phone_number.to_string()))
            .bind(("points", accrual.points));
        for (i, promotion_id) in accrual.visit_promotion_ids.iter().enumerate() {
            query = query.bind((format!("promo_{i}"), promotion_id.clone()));
        }

        query.await?.check()?;
        Ok(())
    }

    /// Redeem a visit-based reward: decrement the counter by exactly
    /// the goal, guarded in the same statement so a concurrent
    /// redemption cannot take the counter negative. Returns the
    /// updated record, or None when the goal was not reached.
    pub async fn redeem(
        &self,
        tenant_id: &str,
        phone_number: &str,
        promotion_id: &str,
        goal: i32,
    ) -> RepoResult<Option<CustomerLoyaltyProgress>> {
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE loyalty_progress SET visit_counts[$promo] -= $goal \
                 WHERE tenant_id = $tenant AND phone_number = $phone \
                 AND visit_counts[$promo] >= $goal RETURN AFTER",
            )
            .bind(("tenant", tenant_id.to_string()))
            .bind(("phone", phone_number.to_string()))
            .bind(("promo", promotion_id.to_string()))
            .bind(("goal", goal))
            .await?;
        let records: Vec<CustomerLoyaltyProgress> = result.take(0)?;
        Ok(records.into_iter().next())
    }
}
