//! Handlers for the `/devilfruits` resource.
//!
//! Responses carry the fruit's type as a name (`"type": "Logia"`), not its id.

use axum::extract::{Path, Query, State};
use axum::Json;
use grandline_core::pagination::PageRequest;
use grandline_core::types::DbId;
use grandline_db::models::devil_fruit::{CreateDevilFruit, DevilFruitResponse};
use grandline_db::repositories::DevilFruitRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::projection;
use crate::query::validated_page;
use crate::response::DetailResponse;
use crate::state::AppState;

const ENTITY: &str = "Devil Fruit";

/// POST /devilfruits/
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateDevilFruit>,
) -> AppResult<Json<DevilFruitResponse>> {
    let row = DevilFruitRepo::create(&state.pool, &input).await?;
    Ok(Json(projection::devil_fruit(&state.pool, row).await?))
}

/// GET /devilfruits/
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    page: Query<PageRequest>,
) -> AppResult<Json<Vec<DevilFruitResponse>>> {
    let page = validated_page(page)?;
    let rows = DevilFruitRepo::list(&state.pool, &page).await?;
    Ok(Json(projection::devil_fruits(&state.pool, rows).await?))
}

/// GET /devilfruits/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DevilFruitResponse>> {
    let row = DevilFruitRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(projection::devil_fruit(&state.pool, row).await?))
}

/// PUT /devilfruits/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateDevilFruit>,
) -> AppResult<Json<DevilFruitResponse>> {
    let row = DevilFruitRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(projection::devil_fruit(&state.pool, row).await?))
}

/// DELETE /devilfruits/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DetailResponse>> {
    if DevilFruitRepo::delete(&state.pool, id).await? {
        Ok(Json(DetailResponse::deleted(ENTITY)))
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}
