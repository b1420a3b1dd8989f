//! Handlers for the `/boats` resource.
//!
//! `crew_id` is required on write; responses show the crew by name.

use axum::extract::{Path, Query, State};
use axum::Json;
use grandline_core::pagination::PageRequest;
use grandline_core::types::DbId;
use grandline_db::models::boat::{BoatResponse, CreateBoat};
use grandline_db::repositories::BoatRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::projection;
use crate::query::validated_page;
use crate::response::DetailResponse;
use crate::state::AppState;

const ENTITY: &str = "Boat";

/// POST /boats/
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateBoat>,
) -> AppResult<Json<BoatResponse>> {
    let row = BoatRepo::create(&state.pool, &input).await?;
    Ok(Json(projection::boat(&state.pool, row).await?))
}

/// GET /boats/
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    page: Query<PageRequest>,
) -> AppResult<Json<Vec<BoatResponse>>> {
    let page = validated_page(page)?;
    let rows = BoatRepo::list(&state.pool, &page).await?;
    Ok(Json(projection::boats(&state.pool, rows).await?))
}

/// GET /boats/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<BoatResponse>> {
    let row = BoatRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(projection::boat(&state.pool, row).await?))
}

/// PUT /boats/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateBoat>,
) -> AppResult<Json<BoatResponse>> {
    let row = BoatRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(projection::boat(&state.pool, row).await?))
}

/// DELETE /boats/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DetailResponse>> {
    if BoatRepo::delete(&state.pool, id).await? {
        Ok(Json(DetailResponse::deleted(ENTITY)))
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}
