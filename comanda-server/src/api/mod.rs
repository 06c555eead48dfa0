//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`board`] - kanban board view
//! - [`floor_plan`] - floor-plan occupancy view
//! - [`prep`] - prep-station view
//! - [`orders`] - checkout and order lifecycle actions
//! - [`tables`] - floor-plan table management + batch completion
//! - [`promotions`] - promotion management
//! - [`loyalty`] - loyalty progress and redemption
//! - [`menu`] - menu items and ingredients
//! - [`stores`] - store locations
//! - [`events`] - change-notification stream (SSE)

pub mod board;
pub mod events;
pub mod floor_plan;
pub mod health;
pub mod loyalty;
pub mod menu;
pub mod orders;
pub mod prep;
pub mod promotions;
pub mod stores;
pub mod tables;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(board::router())
        .merge(floor_plan::router())
        .merge(prep::router())
        .merge(orders::router())
        .merge(tables::router())
        .merge(promotions::router())
        .merge(loyalty::router())
        .merge(menu::router())
        .merge(stores::router())
        .merge(events::router())
}

/// Build the fully configured application with middleware and state
pub fn build_app(state: &ServerState) -> Router {
    build_router()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone())
}
