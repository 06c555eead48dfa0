//! Loyalty handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use shared::models::{CustomerLoyaltyProgress, LoyaltyProgram, PromotionKind};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{LoyaltyRepository, PromotionRepository};
use crate::promotions::apply_redemption;
use crate::utils::{AppError, AppResult};

/// GET /api/loyalty/:phone - progress lookup
pub async fn get_progress(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(phone): Path<String>,
) -> AppResult<Json<CustomerLoyaltyProgress>> {
    let repo = LoyaltyRepository::new(state.get_db());
    let progress = repo
        .find_by_phone(&user.tenant_id, &phone)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No loyalty record for {}", phone)))?;
    Ok(Json(progress))
}

#[derive(Debug, Deserialize)]
pub struct RedeemPayload {
    pub promotion_id: String,
}

/// POST /api/loyalty/:phone/redeem - visit-based redemption
///
/// Decrements the counter by exactly the promotion's goal so surplus
/// visits carry into the next cycle.
pub async fn redeem(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(phone): Path<String>,
    Json(payload): Json<RedeemPayload>,
) -> AppResult<Json<CustomerLoyaltyProgress>> {
    let promotion = PromotionRepository::new(state.get_db())
        .find_by_promotion_id(&user.tenant_id, &payload.promotion_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Promotion {} not found", payload.promotion_id))
        })?;

    let goal = match &promotion.kind {
        PromotionKind::Loyalty(LoyaltyProgram::VisitBased { goal, .. }) => *goal,
        _ => {
            return Err(AppError::business_rule(
                "Only visit-based loyalty promotions are redeemable here",
            ));
        }
    };
    if !promotion.is_active {
        return Err(AppError::business_rule("Promotion is not active"));
    }

    let repo = LoyaltyRepository::new(state.get_db());
    let progress = repo
        .find_by_phone(&user.tenant_id, &phone)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No loyalty record for {}", phone)))?;

    let current = progress.visits_for(&payload.promotion_id);
    if apply_redemption(current, goal).is_none() {
        return Err(AppError::business_rule(format!(
            "Customer has {} of {} required visits",
            current, goal
        )));
    }

    // The store-side decrement re-checks the goal, so a concurrent
    // redemption fails cleanly instead of going negative
    let updated = repo
        .redeem(&user.tenant_id, &phone, &payload.promotion_id, goal)
        .await?
        .ok_or_else(|| AppError::conflict("Redemption lost a concurrent update, retry"))?;

    tracing::info!(
        phone = %phone,
        promotion = %promotion.name,
        operator = %user.username,
        "Loyalty reward redeemed"
    );
    Ok(Json(updated))
}
