//! Handlers for the `/regions` resource.
//!
//! Region responses embed the islands located in the region.

use axum::extract::{Path, Query, State};
use axum::Json;
use grandline_core::pagination::PageRequest;
use grandline_core::types::DbId;
use grandline_db::models::region::{CreateRegion, RegionResponse};
use grandline_db::repositories::RegionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::projection;
use crate::query::validated_page;
use crate::response::DetailResponse;
use crate::state::AppState;

const ENTITY: &str = "Region";

/// POST /regions/
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateRegion>,
) -> AppResult<Json<RegionResponse>> {
    let row = RegionRepo::create(&state.pool, &input).await?;
    Ok(Json(projection::region(&state.pool, row).await?))
}

/// GET /regions/
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    page: Query<PageRequest>,
) -> AppResult<Json<Vec<RegionResponse>>> {
    let page = validated_page(page)?;
    let rows = RegionRepo::list(&state.pool, &page).await?;
    Ok(Json(projection::regions(&state.pool, rows).await?))
}

/// GET /regions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<RegionResponse>> {
    let row = RegionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(projection::region(&state.pool, row).await?))
}

/// PUT /regions/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateRegion>,
) -> AppResult<Json<RegionResponse>> {
    let row = RegionRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(projection::region(&state.pool, row).await?))
}

/// DELETE /regions/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DetailResponse>> {
    if RegionRepo::delete(&state.pool, id).await? {
        Ok(Json(DetailResponse::deleted(ENTITY)))
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}
