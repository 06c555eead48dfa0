//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Quantity of one ingredient consumed per unit of the menu item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeLine {
    pub ingredient_id: String,
    pub quantity: f64,
}

/// Menu item entity. Orders snapshot `name` and price at checkout;
/// later edits here never touch existing orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub menu_item_id: String,
    pub tenant_id: String,
    pub name: String,
    /// Base unit price before modifier deltas
    pub price: f64,
    /// Stock deduction at order completion is driven by these lines
    #[serde(default)]
    pub recipe: Vec<RecipeLine>,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_true() -> bool {
    true
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub recipe: Vec<RecipeLine>,
}
