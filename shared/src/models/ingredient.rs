//! Ingredient Stock Model

use serde::{Deserialize, Serialize};

/// Tracked inventory ingredient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    pub ingredient_id: String,
    pub tenant_id: String,
    pub name: String,
    /// Unit of measure for display (e.g. "g", "ml", "pcs")
    pub unit: String,
    /// Current stock level; decremented atomically at order completion
    pub stock: f64,
}

/// Create ingredient payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientCreate {
    pub name: String,
    pub unit: String,
    #[serde(default)]
    pub stock: f64,
}
