//! Floor plan table handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use shared::models::{FloorPlanTable, FloorPlanTableCreate, FloorPlanTableUpdate, TableHint};

use crate::auth::CurrentUser;
use crate::core::{ChangeAction, ChangeEvent, ServerState};
use crate::db::repository::{FloorTableRepository, MenuItemRepository, OrderRepository};
use crate::orders::plan_table_completion;
use crate::utils::{AppError, AppResult};

const RESOURCE: &str = "table";

/// GET /api/tables - all tables of the tenant
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<FloorPlanTable>>> {
    let repo = FloorTableRepository::new(state.get_db());
    let tables = repo.find_all(&user.tenant_id).await?;
    Ok(Json(tables))
}

/// POST /api/tables - create a table
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<FloorPlanTableCreate>,
) -> AppResult<Json<FloorPlanTable>> {
    user.role.require_manage()?;
    let repo = FloorTableRepository::new(state.get_db());
    let table = repo
        .create(&user.tenant_id, uuid::Uuid::new_v4().to_string(), payload)
        .await?;

    state.publish_change(ChangeEvent::new(
        &user.tenant_id,
        RESOURCE,
        ChangeAction::Created,
        &table.table_id,
    ));
    Ok(Json(table))
}

/// PUT /api/tables/:id - update geometry/label
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<FloorPlanTableUpdate>,
) -> AppResult<Json<FloorPlanTable>> {
    user.role.require_manage()?;
    let repo = FloorTableRepository::new(state.get_db());
    let table = repo.update(&user.tenant_id, &id, payload).await?;

    state.publish_change(ChangeEvent::new(
        &user.tenant_id,
        RESOURCE,
        ChangeAction::Updated,
        &id,
    ));
    Ok(Json(table))
}

/// DELETE /api/tables/:id
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    user.role.require_manage()?;
    let repo = FloorTableRepository::new(state.get_db());
    repo.find_by_table_id(&user.tenant_id, &id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Table {} not found", id)))?;
    let result = repo.delete(&user.tenant_id, &id).await?;

    state.publish_change(ChangeEvent::new(
        &user.tenant_id,
        RESOURCE,
        ChangeAction::Deleted,
        &id,
    ));
    Ok(Json(result))
}

#[derive(Debug, Deserialize)]
pub struct HintPayload {
    pub hint: TableHint,
}

/// PUT /api/tables/:id/hint - persisted status hint
pub async fn set_hint(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<HintPayload>,
) -> AppResult<Json<FloorPlanTable>> {
    let repo = FloorTableRepository::new(state.get_db());
    let table = repo.set_hint(&user.tenant_id, &id, payload.hint).await?;

    state.publish_change(ChangeEvent::new(
        &user.tenant_id,
        RESOURCE,
        ChangeAction::Updated,
        &id,
    ));
    Ok(Json(table))
}

/// POST /api/tables/:id/complete - complete every order grouped under
/// this table, deduct linked stock and flip the hint, atomically
pub async fn complete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<String>>> {
    if !user.role.can_move_card(shared::OrderStatus::Ready) {
        return Err(AppError::forbidden("Role may not complete orders"));
    }

    let table = FloorTableRepository::new(state.get_db())
        .find_by_table_id(&user.tenant_id, &id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Table {} not found", id)))?;

    let orders = state.hub.snapshot(&user.tenant_id);
    let menu_item_ids: Vec<String> = orders
        .iter()
        .flat_map(|o| o.items.iter().map(|i| i.menu_item_id.clone()))
        .collect();
    let menu_items = MenuItemRepository::new(state.get_db())
        .find_by_ids(&user.tenant_id, menu_item_ids)
        .await?;

    let plan = plan_table_completion(&table.table_id, &table.label, &orders, &menu_items);
    if plan.is_empty() {
        return Err(AppError::business_rule(format!(
            "Table '{}' has no open orders",
            table.label
        )));
    }

    // Atomic batch: every grouped order completes and every decrement
    // applies, or nothing does. The hub only changes after the commit.
    OrderRepository::new(state.get_db())
        .complete_batch(&user.tenant_id, &plan)
        .await?;

    for order_id in &plan.order_ids {
        if let Some(mut order) = state.hub.get(&user.tenant_id, order_id) {
            order.status = shared::OrderStatus::Completed;
            state.hub.apply(order);
        }
        state.publish_change(ChangeEvent::new(
            &user.tenant_id,
            "order",
            ChangeAction::Updated,
            order_id,
        ));
    }
    state.publish_change(ChangeEvent::new(
        &user.tenant_id,
        RESOURCE,
        ChangeAction::Updated,
        &id,
    ));

    tracing::info!(
        table = %table.label,
        orders = plan.order_ids.len(),
        operator = %user.username,
        "Table completed"
    );
    Ok(Json(plan.order_ids))
}
