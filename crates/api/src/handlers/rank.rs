//! Handlers for the `/ranks` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use grandline_core::pagination::PageRequest;
use grandline_core::types::DbId;
use grandline_db::models::rank::{CreateRank, Rank};
use grandline_db::repositories::RankRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::validated_page;
use crate::response::DetailResponse;
use crate::state::AppState;

const ENTITY: &str = "Rank";

/// POST /ranks/
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateRank>,
) -> AppResult<Json<Rank>> {
    let row = RankRepo::create(&state.pool, &input).await?;
    Ok(Json(row))
}

/// GET /ranks/
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    page: Query<PageRequest>,
) -> AppResult<Json<Vec<Rank>>> {
    let page = validated_page(page)?;
    let rows = RankRepo::list(&state.pool, &page).await?;
    Ok(Json(rows))
}

/// GET /ranks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Rank>> {
    let row = RankRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(row))
}

/// PUT /ranks/{id}
///
/// Full replace: every field is overwritten, omitted optional fields become null.
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateRank>,
) -> AppResult<Json<Rank>> {
    let row = RankRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(row))
}

/// DELETE /ranks/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DetailResponse>> {
    if RankRepo::delete(&state.pool, id).await? {
        Ok(Json(DetailResponse::deleted(ENTITY)))
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}
