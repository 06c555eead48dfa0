//! Customer Loyalty Progress Model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-customer loyalty state, keyed by phone number (the only customer
/// identity in the system; there are no end-customer accounts).
///
/// Created lazily on the first qualifying order and mutated only
/// through atomic increments; the application never deletes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerLoyaltyProgress {
    pub tenant_id: String,
    pub phone_number: String,
    /// Spend-based points balance
    #[serde(default)]
    pub points: i64,
    /// Visit counters per visit-based promotion id
    #[serde(default)]
    pub visit_counts: HashMap<String, i32>,
}

impl CustomerLoyaltyProgress {
    pub fn new(tenant_id: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            phone_number: phone_number.into(),
            points: 0,
            visit_counts: HashMap::new(),
        }
    }

    /// Visit count toward one promotion's goal
    pub fn visits_for(&self, promotion_id: &str) -> i32 {
        self.visit_counts.get(promotion_id).copied().unwrap_or(0)
    }
}
