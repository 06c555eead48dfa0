//! Kanban board handlers

use axum::{Json, extract::{Query, State}};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::board::{BoardFilter, KanbanBoard, StoreFilter, build_board};
use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::time::now_millis;

#[derive(Debug, Deserialize)]
pub struct BoardQuery {
    /// "all" (default), "online", or a store id
    pub store: Option<String>,
    /// Substring match on plate number or order id
    pub search: Option<String>,
}

/// GET /api/board - the four active columns for this tenant
pub async fn get_board(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<BoardQuery>,
) -> AppResult<Json<KanbanBoard>> {
    let filter = BoardFilter {
        store: StoreFilter::parse(query.store.as_deref()),
        search: query.search.filter(|s| !s.trim().is_empty()),
    };
    let orders = state.hub.snapshot(&user.tenant_id);
    Ok(Json(build_board(&orders, &filter, now_millis())))
}
