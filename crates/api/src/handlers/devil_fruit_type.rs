//! Handlers for the `/devilfruit-types` resource.
//!
//! Types classify devil fruits; a fruit's response shows its type by name.

use axum::extract::{Path, Query, State};
use axum::Json;
use grandline_core::pagination::PageRequest;
use grandline_core::types::DbId;
use grandline_db::models::devil_fruit::{CreateDevilFruitType, DevilFruitType};
use grandline_db::repositories::DevilFruitTypeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::validated_page;
use crate::response::DetailResponse;
use crate::state::AppState;

const ENTITY: &str = "Devil Fruit Type";

/// POST /devilfruit-types/
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateDevilFruitType>,
) -> AppResult<Json<DevilFruitType>> {
    let row = DevilFruitTypeRepo::create(&state.pool, &input).await?;
    Ok(Json(row))
}

/// GET /devilfruit-types/
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    page: Query<PageRequest>,
) -> AppResult<Json<Vec<DevilFruitType>>> {
    let page = validated_page(page)?;
    let rows = DevilFruitTypeRepo::list(&state.pool, &page).await?;
    Ok(Json(rows))
}

/// GET /devilfruit-types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DevilFruitType>> {
    let row = DevilFruitTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(row))
}

/// PUT /devilfruit-types/{id}
///
/// Full replace: every field is overwritten, omitted optional fields become null.
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateDevilFruitType>,
) -> AppResult<Json<DevilFruitType>> {
    let row = DevilFruitTypeRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(row))
}

/// DELETE /devilfruit-types/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DetailResponse>> {
    if DevilFruitTypeRepo::delete(&state.pool, id).await? {
        Ok(Json(DetailResponse::deleted(ENTITY)))
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}
