//! Menu and inventory handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use shared::models::{Ingredient, IngredientCreate, MenuItem, MenuItemCreate};

use crate::auth::CurrentUser;
use crate::core::{ChangeAction, ChangeEvent, ServerState};
use crate::db::repository::{IngredientRepository, MenuItemRepository};
use crate::utils::AppResult;

/// GET /api/menu-items
pub async fn list_menu_items(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<MenuItem>>> {
    let repo = MenuItemRepository::new(state.get_db());
    let items = repo.find_all(&user.tenant_id).await?;
    Ok(Json(items))
}

/// POST /api/menu-items
pub async fn create_menu_item(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    user.role.require_manage()?;
    let repo = MenuItemRepository::new(state.get_db());
    let item = repo
        .create(&user.tenant_id, uuid::Uuid::new_v4().to_string(), payload)
        .await?;

    state.publish_change(ChangeEvent::new(
        &user.tenant_id,
        "menu_item",
        ChangeAction::Created,
        &item.menu_item_id,
    ));
    Ok(Json(item))
}

/// GET /api/ingredients
pub async fn list_ingredients(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<Ingredient>>> {
    let repo = IngredientRepository::new(state.get_db());
    let ingredients = repo.find_all(&user.tenant_id).await?;
    Ok(Json(ingredients))
}

/// POST /api/ingredients
pub async fn create_ingredient(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<IngredientCreate>,
) -> AppResult<Json<Ingredient>> {
    user.role.require_manage()?;
    let repo = IngredientRepository::new(state.get_db());
    let ingredient = repo
        .create(&user.tenant_id, uuid::Uuid::new_v4().to_string(), payload)
        .await?;

    state.publish_change(ChangeEvent::new(
        &user.tenant_id,
        "ingredient",
        ChangeAction::Created,
        &ingredient.ingredient_id,
    ));
    Ok(Json(ingredient))
}

#[derive(Debug, Deserialize)]
pub struct AdjustPayload {
    pub delta: f64,
}

/// PUT /api/ingredients/:id/adjust - manual stock correction
pub async fn adjust_stock(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<AdjustPayload>,
) -> AppResult<Json<Ingredient>> {
    user.role.require_manage()?;
    let repo = IngredientRepository::new(state.get_db());
    let ingredient = repo
        .adjust_stock(&user.tenant_id, &id, payload.delta)
        .await?;

    state.publish_change(ChangeEvent::new(
        &user.tenant_id,
        "ingredient",
        ChangeAction::Updated,
        &id,
    ));
    Ok(Json(ingredient))
}
