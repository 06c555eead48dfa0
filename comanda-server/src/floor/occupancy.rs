//! Floor-plan occupancy resolver
//!
//! Joins table definitions with in-flight orders by plate label and
//! produces per-table status plus an aggregated order view. The
//! persisted table hint is only consulted for tables with no live
//! orders; computed status always wins otherwise.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{FloorPlanTable, TableHint};
use shared::money::{to_decimal, to_f64};
use shared::{Order, OrderItem, PlateKey};

use crate::board::classifier::needs_attention;

/// Characters of each sub-order id kept in the synthetic combined id
const AGGREGATE_ID_PREFIX_LEN: usize = 6;

/// Resolved status of one table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    Available,
    Seated,
    Ordered,
    Attention,
    NeedsCleaning,
}

impl TableStatus {
    /// Statuses counting toward the occupancy KPI
    pub fn is_occupied(&self) -> bool {
        matches!(
            self,
            TableStatus::Seated | TableStatus::Ordered | TableStatus::Attention
        )
    }
}

/// Synthetic combined view of all orders grouped under one table.
/// Never persisted; exists only for display and the combined bill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregatedOrder {
    /// Joined truncated sub-ids, e.g. "a1b2c3+d4e5f6"
    pub order_id: String,
    /// All items across the group, preserving per-order order
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
    pub tip: f64,
    pub platform_fee: f64,
    pub total: f64,
    /// Earliest sub-order timestamp
    pub created_at: i64,
}

/// Per-table resolution result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableView {
    pub table: FloorPlanTable,
    pub status: TableStatus,
    pub aggregated: Option<AggregatedOrder>,
    pub orders: Vec<Order>,
}

/// Whole floor plan with the occupancy KPI
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FloorPlanView {
    pub tables: Vec<TableView>,
    /// Occupied tables / total tables, 0.0 when the plan is empty
    pub occupancy: f64,
}

/// Resolve the floor plan against the active order set
pub fn resolve_floor_plan(
    tables: &[FloorPlanTable],
    orders: &[Order],
    now_millis: i64,
) -> FloorPlanView {
    // Group active orders by normalized plate label
    let mut by_plate: HashMap<PlateKey, Vec<&Order>> = HashMap::new();
    for order in orders.iter().filter(|o| o.status.is_active()) {
        if let Some(plate) = &order.plate_number {
            by_plate.entry(PlateKey::new(plate)).or_default().push(order);
        }
    }

    let mut views = Vec::with_capacity(tables.len());
    for table in tables {
        let matched = by_plate
            .get(&PlateKey::new(&table.label))
            .map(|orders| orders.as_slice())
            .unwrap_or_default();

        let status = resolve_status(table, matched, now_millis);
        let aggregated = (!matched.is_empty()).then(|| aggregate_orders(matched));

        views.push(TableView {
            table: table.clone(),
            status,
            aggregated,
            orders: matched.iter().map(|o| (*o).clone()).collect(),
        });
    }

    let occupied = views.iter().filter(|v| v.status.is_occupied()).count();
    let occupancy = if views.is_empty() {
        0.0
    } else {
        occupied as f64 / views.len() as f64
    };

    FloorPlanView {
        tables: views,
        occupancy,
    }
}

fn resolve_status(table: &FloorPlanTable, matched: &[&Order], now_millis: i64) -> TableStatus {
    if matched.is_empty() {
        return match table.hint {
            TableHint::Seated => TableStatus::Seated,
            TableHint::NeedsCleaning => TableStatus::NeedsCleaning,
            TableHint::Available => TableStatus::Available,
        };
    }
    if matched.iter().any(|o| needs_attention(o, now_millis)) {
        TableStatus::Attention
    } else {
        TableStatus::Ordered
    }
}

/// Synthesize the combined order for one table group
fn aggregate_orders(orders: &[&Order]) -> AggregatedOrder {
    let order_id = orders
        .iter()
        .map(|o| truncate_id(&o.order_id))
        .collect::<Vec<_>>()
        .join("+");

    let mut items = Vec::new();
    let mut subtotal = Decimal::ZERO;
    let mut tip = Decimal::ZERO;
    let mut platform_fee = Decimal::ZERO;
    let mut total = Decimal::ZERO;
    for order in orders {
        items.extend(order.items.iter().cloned());
        subtotal += to_decimal(order.subtotal);
        tip += to_decimal(order.tip);
        platform_fee += to_decimal(order.platform_fee);
        total += to_decimal(order.total);
    }

    AggregatedOrder {
        order_id,
        items,
        subtotal: to_f64(subtotal),
        tip: to_f64(tip),
        platform_fee: to_f64(platform_fee),
        total: to_f64(total),
        created_at: orders.iter().map(|o| o.created_at).min().unwrap_or(0),
    }
}

fn truncate_id(id: &str) -> &str {
    &id[..id.len().min(AGGREGATE_ID_PREFIX_LEN)]
}
