//! Loyalty API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/loyalty", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/{phone}", get(handler::get_progress))
        .route("/{phone}/redeem", post(handler::redeem))
}
