//! Handlers for the `/characters` resource.
//!
//! Characters are returned exactly as stored, reference ids included. None
//! of the references is checked on write, and deleting a referenced row
//! leaves the id in place.

use axum::extract::{Path, Query, State};
use axum::Json;
use grandline_core::pagination::PageRequest;
use grandline_core::types::DbId;
use grandline_db::models::character::{Character, CreateCharacter};
use grandline_db::repositories::CharacterRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::validated_page;
use crate::response::DetailResponse;
use crate::state::AppState;

const ENTITY: &str = "Character";

/// POST /characters/
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateCharacter>,
) -> AppResult<Json<Character>> {
    let row = CharacterRepo::create(&state.pool, &input).await?;
    Ok(Json(row))
}

/// GET /characters/
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    page: Query<PageRequest>,
) -> AppResult<Json<Vec<Character>>> {
    let page = validated_page(page)?;
    let rows = CharacterRepo::list(&state.pool, &page).await?;
    Ok(Json(rows))
}

/// GET /characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Character>> {
    let row = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(row))
}

/// PUT /characters/{id}
///
/// Full replace: every field is overwritten, omitted optional fields become null.
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateCharacter>,
) -> AppResult<Json<Character>> {
    let row = CharacterRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(row))
}

/// DELETE /characters/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DetailResponse>> {
    if CharacterRepo::delete(&state.pool, id).await? {
        Ok(Json(DetailResponse::deleted(ENTITY)))
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}
