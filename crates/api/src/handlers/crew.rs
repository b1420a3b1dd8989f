//! Handlers for the `/crews` resource.
//!
//! Crew responses embed the crew's boats and members. Deleting a crew
//! leaves those rows behind with a stale `crew_id`.

use axum::extract::{Path, Query, State};
use axum::Json;
use grandline_core::pagination::PageRequest;
use grandline_core::types::DbId;
use grandline_db::models::crew::{CreateCrew, CrewResponse};
use grandline_db::repositories::CrewRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::projection;
use crate::query::validated_page;
use crate::response::DetailResponse;
use crate::state::AppState;

const ENTITY: &str = "Crew";

/// POST /crews/
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateCrew>,
) -> AppResult<Json<CrewResponse>> {
    let row = CrewRepo::create(&state.pool, &input).await?;
    Ok(Json(projection::crew(&state.pool, row).await?))
}

/// GET /crews/
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    page: Query<PageRequest>,
) -> AppResult<Json<Vec<CrewResponse>>> {
    let page = validated_page(page)?;
    let rows = CrewRepo::list(&state.pool, &page).await?;
    Ok(Json(projection::crews(&state.pool, rows).await?))
}

/// GET /crews/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<CrewResponse>> {
    let row = CrewRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(projection::crew(&state.pool, row).await?))
}

/// PUT /crews/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateCrew>,
) -> AppResult<Json<CrewResponse>> {
    let row = CrewRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(projection::crew(&state.pool, row).await?))
}

/// DELETE /crews/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DetailResponse>> {
    if CrewRepo::delete(&state.pool, id).await? {
        Ok(Json(DetailResponse::deleted(ENTITY)))
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}
