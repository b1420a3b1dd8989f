//! Handlers for the `/haki-types` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use grandline_core::pagination::PageRequest;
use grandline_core::types::DbId;
use grandline_db::models::haki::{CreateHakiType, HakiType};
use grandline_db::repositories::HakiTypeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::validated_page;
use crate::response::DetailResponse;
use crate::state::AppState;

const ENTITY: &str = "Haki Type";

/// POST /haki-types/
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateHakiType>,
) -> AppResult<Json<HakiType>> {
    let row = HakiTypeRepo::create(&state.pool, &input).await?;
    Ok(Json(row))
}

/// GET /haki-types/
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    page: Query<PageRequest>,
) -> AppResult<Json<Vec<HakiType>>> {
    let page = validated_page(page)?;
    let rows = HakiTypeRepo::list(&state.pool, &page).await?;
    Ok(Json(rows))
}

/// GET /haki-types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<HakiType>> {
    let row = HakiTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(row))
}

/// PUT /haki-types/{id}
///
/// Full replace: every field is overwritten, omitted optional fields become null.
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateHakiType>,
) -> AppResult<Json<HakiType>> {
    let row = HakiTypeRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(row))
}

/// DELETE /haki-types/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DetailResponse>> {
    if HakiTypeRepo::delete(&state.pool, id).await? {
        Ok(Json(DetailResponse::deleted(ENTITY)))
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}
