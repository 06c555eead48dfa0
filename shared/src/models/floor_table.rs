//! Floor Plan Table Model

use serde::{Deserialize, Serialize};

/// Table footprint on the floor-plan canvas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableShape {
    #[default]
    Rectangle,
    Circle,
}

/// Persisted status hint. Only consulted when a table has no live
/// orders; computed status always wins otherwise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableHint {
    #[default]
    Available,
    Seated,
    NeedsCleaning,
}

/// A seating unit on the floor plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FloorPlanTable {
    pub table_id: String,
    pub tenant_id: String,
    /// Display label and soft join key against order plate numbers
    pub label: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub rotation: i32,
    pub shape: TableShape,
    #[serde(default)]
    pub hint: TableHint,
}

/// Create floor plan table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorPlanTableCreate {
    pub label: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub rotation: i32,
    #[serde(default)]
    pub shape: TableShape,
}

/// Update floor plan table payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FloorPlanTableUpdate {
    pub label: Option<String>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub rotation: Option<i32>,
    pub shape: Option<TableShape>,
}
