//! Handlers for the `/haki` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use grandline_core::pagination::PageRequest;
use grandline_core::types::DbId;
use grandline_db::models::haki::{CreateHaki, HakiResponse};
use grandline_db::repositories::HakiRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::projection;
use crate::query::validated_page;
use crate::response::DetailResponse;
use crate::state::AppState;

const ENTITY: &str = "Haki";

/// POST /haki/
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateHaki>,
) -> AppResult<Json<HakiResponse>> {
    let row = HakiRepo::create(&state.pool, &input).await?;
    Ok(Json(projection::haki(&state.pool, row).await?))
}

/// GET /haki/
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    page: Query<PageRequest>,
) -> AppResult<Json<Vec<HakiResponse>>> {
    let page = validated_page(page)?;
    let rows = HakiRepo::list(&state.pool, &page).await?;
    Ok(Json(projection::haki_list(&state.pool, rows).await?))
}

/// GET /haki/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<HakiResponse>> {
    let row = HakiRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(projection::haki(&state.pool, row).await?))
}

/// PUT /haki/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateHaki>,
) -> AppResult<Json<HakiResponse>> {
    let row = HakiRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(projection::haki(&state.pool, row).await?))
}

/// DELETE /haki/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DetailResponse>> {
    if HakiRepo::delete(&state.pool, id).await? {
        Ok(Json(DetailResponse::deleted(ENTITY)))
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}
