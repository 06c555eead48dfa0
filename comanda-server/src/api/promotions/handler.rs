//! Promotion handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use shared::models::{Promotion, PromotionCreate, PromotionUpdate};

use crate::auth::CurrentUser;
use crate::core::{ChangeAction, ChangeEvent, ServerState};
use crate::db::repository::PromotionRepository;
use crate::utils::AppResult;

const RESOURCE: &str = "promotion";

/// GET /api/promotions
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<Promotion>>> {
    let repo = PromotionRepository::new(state.get_db());
    let promotions = repo.find_all(&user.tenant_id).await?;
    Ok(Json(promotions))
}

/// POST /api/promotions
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<PromotionCreate>,
) -> AppResult<Json<Promotion>> {
    user.role.require_manage()?;
    let repo = PromotionRepository::new(state.get_db());
    let promotion = repo
        .create(&user.tenant_id, uuid::Uuid::new_v4().to_string(), payload)
        .await?;

    state.publish_change(ChangeEvent::new(
        &user.tenant_id,
        RESOURCE,
        ChangeAction::Created,
        &promotion.promotion_id,
    ));
    Ok(Json(promotion))
}

/// PUT /api/promotions/:id
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<PromotionUpdate>,
) -> AppResult<Json<Promotion>> {
    user.role.require_manage()?;
    let repo = PromotionRepository::new(state.get_db());
    let promotion = repo.update(&user.tenant_id, &id, payload).await?;

    state.publish_change(ChangeEvent::new(
        &user.tenant_id,
        RESOURCE,
        ChangeAction::Updated,
        &id,
    ));
    Ok(Json(promotion))
}

#[derive(Debug, Deserialize)]
pub struct ActivePayload {
    pub is_active: bool,
}

/// PUT /api/promotions/:id/active - activation gate
pub async fn set_active(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<ActivePayload>,
) -> AppResult<Json<Promotion>> {
    user.role.require_manage()?;
    let repo = PromotionRepository::new(state.get_db());
    let promotion = repo
        .set_active(&user.tenant_id, &id, payload.is_active)
        .await?;

    state.publish_change(ChangeEvent::new(
        &user.tenant_id,
        RESOURCE,
        ChangeAction::Updated,
        &id,
    ));
    Ok(Json(promotion))
}
