//! Menu and inventory API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/menu-items",
            get(handler::list_menu_items).post(handler::create_menu_item),
        )
        .route(
            "/api/ingredients",
            get(handler::list_ingredients).post(handler::create_ingredient),
        )
        .route(
            "/api/ingredients/{id}/adjust",
            axum::routing::put(handler::adjust_stock),
        )
}
