//! Handlers for the `/mangas` resource.
//!
//! Manga is the only resource with a partial update (`PATCH`) and no
//! delete route.

use axum::extract::{Path, Query, State};
use axum::Json;
use grandline_core::pagination::PageRequest;
use grandline_core::types::DbId;
use grandline_db::models::manga::{CreateManga, Manga, UpdateManga};
use grandline_db::repositories::MangaRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::validated_page;
use crate::state::AppState;

const ENTITY: &str = "Manga";

/// POST /mangas/
///
/// A duplicate name violates `uq_manga_name` and surfaces as 409.
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateManga>,
) -> AppResult<Json<Manga>> {
    let manga = MangaRepo::create(&state.pool, &input).await?;
    Ok(Json(manga))
}

/// GET /mangas/
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    page: Query<PageRequest>,
) -> AppResult<Json<Vec<Manga>>> {
    let page = validated_page(page)?;
    let mangas = MangaRepo::list(&state.pool, &page).await?;
    Ok(Json(mangas))
}

/// GET /mangas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Manga>> {
    let manga = MangaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(manga))
}

/// PATCH /mangas/{id}
///
/// Only the fields present in the body change.
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateManga>,
) -> AppResult<Json<Manga>> {
    let manga = MangaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(manga))
}
