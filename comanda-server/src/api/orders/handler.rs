//! Order handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use shared::{Order, OrderStatus};

use crate::auth::CurrentUser;
use crate::core::{ChangeAction, ChangeEvent, ServerState};
use crate::db::repository::{
    LoyaltyRepository, MenuItemRepository, OrderRepository, PromotionRepository,
};
use crate::orders::checkout::{CheckoutRequest, build_order};
use crate::orders::complete_table::plan_order_completion;
use crate::orders::transition::validate_move;
use crate::promotions::compute_accrual;
use crate::utils::time::now_millis;
use crate::utils::{AppError, AppResult};

const RESOURCE: &str = "order";

/// POST /api/orders - customer checkout
pub async fn checkout(
    State(state): State<ServerState>,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<Order>> {
    if payload.tenant_id.trim().is_empty() {
        return Err(AppError::validation("Missing tenant"));
    }

    let promotions = PromotionRepository::new(state.get_db())
        .find_active(&payload.tenant_id)
        .await?;

    let order_id = uuid::Uuid::new_v4().to_string();
    let order = build_order(
        &payload,
        &promotions,
        order_id,
        now_millis(),
        state.config.platform_fee_rate,
    )?;

    let order = OrderRepository::new(state.get_db()).create(order).await?;

    // Loyalty accrual rides the same checkout; the upsert is atomic per
    // customer so concurrent orders cannot lose counts. A failure here
    // must not unwind the already-persisted order.
    if let Some(phone) = &order.customer_phone_number {
        let accrual = compute_accrual(&order.items, order.subtotal, &promotions);
        if let Err(e) = LoyaltyRepository::new(state.get_db())
            .accrue(&order.tenant_id, phone, &accrual)
            .await
        {
            tracing::error!(order_id = %order.order_id, error = %e, "Loyalty accrual failed");
        }
    }

    state.hub.apply(order.clone());
    state.publish_change(ChangeEvent::new(
        &order.tenant_id,
        RESOURCE,
        ChangeAction::Created,
        &order.order_id,
    ));

    tracing::info!(order_id = %order.order_id, status = %order.status, "Order placed");
    Ok(Json(order))
}

/// GET /api/orders/recent - rolling window of completed orders
pub async fn recent_completed(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<Order>>> {
    let orders = OrderRepository::new(state.get_db())
        .recent_completed(&user.tenant_id, state.config.recent_completed_limit)
        .await?;
    Ok(Json(orders))
}

/// POST /api/orders/:id/approve - Pending -> New
pub async fn approve(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    move_order(&state, &user, &id, OrderStatus::New).await
}

#[derive(Debug, Deserialize)]
pub struct StatusPayload {
    pub status: OrderStatus,
}

/// PUT /api/orders/:id/status - board drag
pub async fn change_status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<StatusPayload>,
) -> AppResult<Json<Order>> {
    move_order(&state, &user, &id, payload.status).await
}

/// POST /api/orders/:id/recall - Completed -> Ready
pub async fn recall(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.get_db());
    // Completed orders are not in the active hub; read the store
    let order = repo
        .find_by_order_id(&user.tenant_id, &id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;

    validate_move(&order, OrderStatus::Ready, user.role)?;
    let updated = repo
        .update_status(&user.tenant_id, &id, OrderStatus::Ready)
        .await?;

    state.hub.apply(updated.clone());
    state.publish_change(ChangeEvent::new(
        &user.tenant_id,
        RESOURCE,
        ChangeAction::Updated,
        &id,
    ));
    tracing::info!(order_id = %id, operator = %user.username, "Order recalled");
    Ok(Json(updated))
}

/// DELETE /api/orders/:id - staff rejection of a Pending order
pub async fn reject(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let order = state
        .hub
        .get(&user.tenant_id, &id)
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;

    // Rejection removes the order rather than transitioning it, and is
    // gated like any move out of Pending
    if !user.role.can_move_card(OrderStatus::Pending) {
        return Err(AppError::forbidden("Admin or manager role required"));
    }
    if order.status != OrderStatus::Pending {
        return Err(AppError::business_rule(format!(
            "Only pending orders can be rejected, order is {}",
            order.status
        )));
    }

    OrderRepository::new(state.get_db())
        .delete(&user.tenant_id, &id)
        .await?;

    state.hub.remove(&id);
    state.publish_change(ChangeEvent::new(
        &user.tenant_id,
        RESOURCE,
        ChangeAction::Deleted,
        &id,
    ));
    tracing::info!(order_id = %id, operator = %user.username, "Order rejected");
    Ok(Json(true))
}

#[derive(Debug, Deserialize)]
pub struct UrgentPayload {
    pub is_urgent: bool,
}

/// PUT /api/orders/:id/urgent - urgency toggle
pub async fn set_urgent(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<UrgentPayload>,
) -> AppResult<Json<Order>> {
    state
        .hub
        .get(&user.tenant_id, &id)
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;

    let updated = OrderRepository::new(state.get_db())
        .set_urgent(&user.tenant_id, &id, payload.is_urgent)
        .await?;

    state.hub.apply(updated.clone());
    state.publish_change(ChangeEvent::new(
        &user.tenant_id,
        RESOURCE,
        ChangeAction::Updated,
        &id,
    ));
    Ok(Json(updated))
}

#[derive(Debug, Deserialize)]
pub struct DeliveredPayload {
    pub is_delivered: bool,
}

/// PUT /api/orders/:id/items/:index/delivered - per-item toggle
pub async fn set_item_delivered(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path((id, index)): Path<(String, usize)>,
    Json(payload): Json<DeliveredPayload>,
) -> AppResult<Json<Order>> {
    let mut order = state
        .hub
        .get(&user.tenant_id, &id)
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;

    let item = order
        .items
        .get_mut(index)
        .ok_or_else(|| AppError::not_found(format!("Order {} has no item {}", id, index)))?;
    item.is_delivered = payload.is_delivered;

    let updated = OrderRepository::new(state.get_db()).replace_items(&order).await?;

    state.hub.apply(updated.clone());
    state.publish_change(ChangeEvent::new(
        &user.tenant_id,
        RESOURCE,
        ChangeAction::Updated,
        &id,
    ));
    Ok(Json(updated))
}

/// Shared status-move path: validate machine + role, merge, refresh hub
async fn move_order(
    state: &ServerState,
    user: &CurrentUser,
    order_id: &str,
    next: OrderStatus,
) -> AppResult<Json<Order>> {
    let order = state
        .hub
        .get(&user.tenant_id, order_id)
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", order_id)))?;

    validate_move(&order, next, user.role)?;

    let repo = OrderRepository::new(state.get_db());
    let updated = if next == OrderStatus::Completed {
        // Completion deducts recipe-linked stock in the same batch as
        // the status write; a failed batch changes nothing
        let menu_items = MenuItemRepository::new(state.get_db())
            .find_by_ids(
                &user.tenant_id,
                order.items.iter().map(|i| i.menu_item_id.clone()).collect(),
            )
            .await?;
        let plan = plan_order_completion(&order, &menu_items);
        repo.complete_batch(&user.tenant_id, &plan).await?;
        Order {
            status: OrderStatus::Completed,
            ..order.clone()
        }
    } else {
        repo.update_status(&user.tenant_id, order_id, next).await?
    };

    state.hub.apply(updated.clone());
    state.publish_change(ChangeEvent::new(
        &user.tenant_id,
        RESOURCE,
        ChangeAction::Updated,
        order_id,
    ));
    tracing::info!(
        order_id = %order_id,
        from = %order.status,
        to = %next,
        operator = %user.username,
        "Order moved"
    );
    Ok(Json(updated))
}
