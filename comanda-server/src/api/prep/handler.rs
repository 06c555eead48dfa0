//! Prep station handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::Order;

use crate::auth::CurrentUser;
use crate::board::{BoardFilter, StoreFilter};
use crate::core::ServerState;
use crate::prep::{PrepItem, aggregate_prep};
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct PrepQuery {
    pub store: Option<String>,
    pub search: Option<String>,
}

/// GET /api/prep - outstanding prep tickets, busiest first. Takes the
/// same store/search filter as the board so both views line up.
pub async fn get_prep(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<PrepQuery>,
) -> AppResult<Json<Vec<PrepItem>>> {
    let filter = BoardFilter {
        store: StoreFilter::parse(query.store.as_deref()),
        search: query.search.filter(|s| !s.trim().is_empty()),
    };
    let orders: Vec<Order> = state
        .hub
        .snapshot(&user.tenant_id)
        .into_iter()
        .filter(|o| filter.matches(o))
        .collect();
    Ok(Json(aggregate_prep(&orders)))
}
