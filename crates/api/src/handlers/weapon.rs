//! Handlers for the `/weapons` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use grandline_core::pagination::PageRequest;
use grandline_core::types::DbId;
use grandline_db::models::weapon::{CreateWeapon, Weapon};
use grandline_db::repositories::WeaponRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::validated_page;
use crate::response::DetailResponse;
use crate::state::AppState;

const ENTITY: &str = "Weapon";

/// POST /weapons/
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateWeapon>,
) -> AppResult<Json<Weapon>> {
    let row = WeaponRepo::create(&state.pool, &input).await?;
    Ok(Json(row))
}

/// GET /weapons/
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    page: Query<PageRequest>,
) -> AppResult<Json<Vec<Weapon>>> {
    let page = validated_page(page)?;
    let rows = WeaponRepo::list(&state.pool, &page).await?;
    Ok(Json(rows))
}

/// GET /weapons/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Weapon>> {
    let row = WeaponRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(row))
}

/// PUT /weapons/{id}
///
/// Full replace: every field is overwritten, omitted optional fields become null.
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateWeapon>,
) -> AppResult<Json<Weapon>> {
    let row = WeaponRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(row))
}

/// DELETE /weapons/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DetailResponse>> {
    if WeaponRepo::delete(&state.pool, id).await? {
        Ok(Json(DetailResponse::deleted(ENTITY)))
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}
