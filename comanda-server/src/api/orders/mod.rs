//! Orders API module
//!
//! Checkout is the customer-facing entry point (QR flow, no staff
//! token); everything else is a staff action on one order document.

mod handler;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        // Customer-facing checkout (tenant comes from the QR payload)
        .route("/", post(handler::checkout))
        // Staff actions
        .route("/recent", get(handler::recent_completed))
        .route("/{id}/approve", post(handler::approve))
        .route("/{id}", delete(handler::reject))
        .route("/{id}/status", put(handler::change_status))
        .route("/{id}/recall", post(handler::recall))
        .route("/{id}/urgent", put(handler::set_urgent))
        .route("/{id}/items/{index}/delivered", put(handler::set_item_delivered))
}
