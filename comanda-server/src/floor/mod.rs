//! Floor-plan occupancy resolution

pub mod occupancy;

pub use occupancy::{
    AggregatedOrder, FloorPlanView, TableStatus, TableView, resolve_floor_plan,
};
