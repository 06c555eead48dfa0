//! Order record model
//!
//! One `Order` is one customer transaction. Line items snapshot the
//! menu item's name and resolved unit price at checkout time; they are
//! never re-resolved against the live menu, since menu items can change
//! or disappear after the order is placed.

use super::OrderStatus;
use serde::{Deserialize, Serialize};

/// A modifier option chosen for a line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectedModifier {
    pub group_name: String,
    pub option_name: String,
    /// Price delta of this option (currency scale)
    pub option_price: f64,
}

/// One line within an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Reference to the menu item, not ownership: the target may later
    /// change or be deleted
    pub menu_item_id: String,
    /// Name snapshot, frozen at order time
    pub name: String,
    /// Positive count
    pub quantity: i32,
    /// Resolved unit price including modifiers, frozen at order time
    pub price: f64,
    #[serde(default)]
    pub selected_modifiers: Vec<SelectedModifier>,
    /// Independently mutable per item by kitchen/floor staff
    #[serde(default)]
    pub is_delivered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Discount line recorded on an order at checkout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppliedDiscount {
    pub promotion_name: String,
    pub amount: f64,
}

/// One customer transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub order_id: String,
    /// Owner scoping; every query filters by this
    pub tenant_id: String,
    /// Insertion order is ticket order
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    /// Table/seat label typed or scanned by the customer; absence means
    /// an online/takeaway order. Joined to tables only by soft label
    /// match, see `PlateKey`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plate_number: Option<String>,
    /// Absence means "online, no physical store"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    pub subtotal: f64,
    pub tip: f64,
    pub platform_fee: f64,
    pub total: f64,
    #[serde(default)]
    pub applied_discounts: Vec<AppliedDiscount>,
    /// Unix millis, immutable once set
    pub created_at: i64,
    /// Mutable by staff; floats the order to the top of its column
    #[serde(default)]
    pub is_urgent: bool,
    /// Loyalty identity key; the only customer identity in the system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone_number: Option<String>,
}

impl Order {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Age of the order relative to `now` (Unix millis)
    pub fn age_millis(&self, now: i64) -> i64 {
        now - self.created_at
    }
}

/// Cart line as submitted by the checkout client. The server resolves
/// the final unit price (base + modifier deltas) into the item snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLineInput {
    pub menu_item_id: String,
    pub name: String,
    pub quantity: i32,
    /// Base unit price before modifier deltas
    pub unit_price: f64,
    #[serde(default)]
    pub selected_modifiers: Vec<SelectedModifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
