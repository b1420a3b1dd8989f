//! Manga (series) entity model and DTOs.

use grandline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `manga` table. `name` is unique.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Manga {
    pub id: DbId,
    pub name: String,
    pub image: String,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
    #[serde(skip_serializing)]
    pub updated_at: Timestamp,
}

/// DTO for creating a new manga.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateManga {
    pub name: String,
    pub image: String,
}

/// DTO for patching a manga. Only provided fields change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateManga {
    pub name: Option<String>,
    pub image: Option<String>,
}
