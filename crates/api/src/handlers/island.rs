//! Handlers for the `/islands` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use grandline_core::pagination::PageRequest;
use grandline_core::types::DbId;
use grandline_db::models::island::{CreateIsland, IslandResponse};
use grandline_db::repositories::IslandRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::projection;
use crate::query::validated_page;
use crate::response::DetailResponse;
use crate::state::AppState;

const ENTITY: &str = "Island";

/// POST /islands/
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateIsland>,
) -> AppResult<Json<IslandResponse>> {
    let row = IslandRepo::create(&state.pool, &input).await?;
    Ok(Json(projection::island(&state.pool, row).await?))
}

/// GET /islands/
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    page: Query<PageRequest>,
) -> AppResult<Json<Vec<IslandResponse>>> {
    let page = validated_page(page)?;
    let rows = IslandRepo::list(&state.pool, &page).await?;
    Ok(Json(projection::islands(&state.pool, rows).await?))
}

/// GET /islands/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<IslandResponse>> {
    let row = IslandRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(projection::island(&state.pool, row).await?))
}

/// PUT /islands/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateIsland>,
) -> AppResult<Json<IslandResponse>> {
    let row = IslandRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(projection::island(&state.pool, row).await?))
}

/// DELETE /islands/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DetailResponse>> {
    if IslandRepo::delete(&state.pool, id).await? {
        Ok(Json(DetailResponse::deleted(ENTITY)))
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}
