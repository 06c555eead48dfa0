//! Table completion planning
//!
//! "Mark complete" on a table completes every order grouped under it
//! and deducts recipe-linked ingredient stock in one atomic batch.
//! This module builds the plan as a pure value; the order repository
//! executes it as a single store transaction, and the hub is updated
//! only after the commit succeeds - a failed batch leaves no partial
//! state anywhere.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use shared::models::MenuItem;
use shared::money::{to_decimal, to_f64};
use shared::{Order, PlateKey};

/// One aggregated stock decrement
#[derive(Debug, Clone, PartialEq)]
pub struct StockDecrement {
    pub ingredient_id: String,
    /// Quantity-weighted sum across every item of every grouped order
    pub quantity: f64,
}

/// The atomic completion batch: orders to complete, aggregated stock
/// decrements, and (for table completion) the hint flip target
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionPlan {
    /// Set for table completion; a single-order completion has no
    /// table side effect
    pub table_id: Option<String>,
    pub order_ids: Vec<String>,
    pub stock_decrements: Vec<StockDecrement>,
}

impl CompletionPlan {
    pub fn is_empty(&self) -> bool {
        self.order_ids.is_empty()
    }
}

/// Build the completion plan for a single order (board drag to the
/// Completed column). Same weighted stock math, no table hint.
pub fn plan_order_completion(order: &Order, menu_items: &[MenuItem]) -> CompletionPlan {
    CompletionPlan {
        table_id: None,
        order_ids: vec![order.order_id.clone()],
        stock_decrements: weighted_decrements(std::slice::from_ref(order), menu_items),
    }
}

/// Build the completion plan for one table.
///
/// `orders` is the tenant's active set; grouping uses the same soft
/// plate-label join as the floor plan. `menu_items` supplies the
/// recipes; items whose menu item no longer exists simply deduct
/// nothing.
pub fn plan_table_completion(
    table_id: &str,
    table_label: &str,
    orders: &[Order],
    menu_items: &[MenuItem],
) -> CompletionPlan {
    let key = PlateKey::new(table_label);
    let grouped: Vec<Order> = orders
        .iter()
        .filter(|o| {
            o.status.is_active()
                && o.plate_number
                    .as_deref()
                    .is_some_and(|p| PlateKey::new(p) == key)
        })
        .cloned()
        .collect();

    CompletionPlan {
        table_id: Some(table_id.to_string()),
        order_ids: grouped.iter().map(|o| o.order_id.clone()).collect(),
        stock_decrements: weighted_decrements(&grouped, menu_items),
    }
}

/// Quantity-weighted decrement per ingredient across every item of
/// every order. BTreeMap keeps the output deterministic for the batch
/// statement text.
fn weighted_decrements(orders: &[Order], menu_items: &[MenuItem]) -> Vec<StockDecrement> {
    let mut decrements: BTreeMap<String, Decimal> = BTreeMap::new();
    for order in orders {
        for item in &order.items {
            let Some(menu_item) = menu_items
                .iter()
                .find(|m| m.menu_item_id == item.menu_item_id)
            else {
                continue;
            };
            for line in &menu_item.recipe {
                let amount = to_decimal(line.quantity) * Decimal::from(item.quantity);
                *decrements.entry(line.ingredient_id.clone()).or_insert(Decimal::ZERO) += amount;
            }
        }
    }
    decrements
        .into_iter()
        .map(|(ingredient_id, quantity)| StockDecrement {
            ingredient_id,
            quantity: to_f64(quantity),
        })
        .collect()
}
