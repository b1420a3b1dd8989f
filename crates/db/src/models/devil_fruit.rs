//! Devil fruit and devil fruit type models and DTOs.

use grandline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `devil_fruit_types` table (e.g. Paramecia, Logia, Zoan).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DevilFruitType {
    pub id: DbId,
    pub name: String,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
    #[serde(skip_serializing)]
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a devil fruit type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDevilFruitType {
    pub name: String,
}

/// A row from the `devil_fruits` table.
#[derive(Debug, Clone, FromRow)]
pub struct DevilFruit {
    pub id: DbId,
    pub name: String,
    pub type_id: Option<DbId>,
    pub manga_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a devil fruit, also used as the full-replace body for `PUT`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDevilFruit {
    pub name: String,
    pub type_id: DbId,
    pub manga_id: Option<DbId>,
}

/// API shape of a devil fruit: the type is flattened to its name.
#[derive(Debug, Clone, Serialize)]
pub struct DevilFruitResponse {
    pub id: DbId,
    pub name: String,
    /// `None` when `type_id` does not resolve to an existing type.
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub manga_id: Option<DbId>,
}
