//! Store handlers

use axum::{Json, extract::State};
use shared::models::{Store, StoreCreate};

use crate::auth::CurrentUser;
use crate::core::{ChangeAction, ChangeEvent, ServerState};
use crate::db::repository::StoreRepository;
use crate::utils::AppResult;

/// GET /api/stores
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<Store>>> {
    let repo = StoreRepository::new(state.get_db());
    let stores = repo.find_all(&user.tenant_id).await?;
    Ok(Json(stores))
}

/// POST /api/stores
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<StoreCreate>,
) -> AppResult<Json<Store>> {
    user.role.require_manage()?;
    let repo = StoreRepository::new(state.get_db());
    let store = repo
        .create(&user.tenant_id, uuid::Uuid::new_v4().to_string(), payload)
        .await?;

    state.publish_change(ChangeEvent::new(
        &user.tenant_id,
        "store",
        ChangeAction::Created,
        &store.store_id,
    ));
    Ok(Json(store))
}
