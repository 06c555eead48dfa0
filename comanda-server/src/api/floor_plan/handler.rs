//! Floor plan handlers

use axum::{Json, extract::State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::FloorTableRepository;
use crate::floor::{FloorPlanView, resolve_floor_plan};
use crate::utils::AppResult;
use crate::utils::time::now_millis;

/// GET /api/floor-plan - per-table status, aggregated orders, occupancy
pub async fn get_floor_plan(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<FloorPlanView>> {
    let repo = FloorTableRepository::new(state.get_db());
    let tables = repo.find_all(&user.tenant_id).await?;
    let orders = state.hub.snapshot(&user.tenant_id);
    Ok(Json(resolve_floor_plan(&tables, &orders, now_millis())))
}
