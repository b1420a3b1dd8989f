//! Character entity model and DTOs.

use grandline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A character row from the `characters` table.
///
/// Every reference is optional and unchecked; ids may point at rows that
/// were never created or have since been deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub strength: Option<f64>,
    pub devil_fruit_id: Option<DbId>,
    pub crew_id: Option<DbId>,
    pub haki_id: Option<DbId>,
    pub weapon_id: Option<DbId>,
    pub rank_id: Option<DbId>,
    pub island_id: Option<DbId>,
    pub region_id: Option<DbId>,
    pub manga_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a character, also used as the full-replace body for `PUT`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCharacter {
    pub name: String,
    pub strength: Option<f64>,
    pub devil_fruit_id: Option<DbId>,
    pub crew_id: Option<DbId>,
    pub haki_id: Option<DbId>,
    pub weapon_id: Option<DbId>,
    pub rank_id: Option<DbId>,
    pub island_id: Option<DbId>,
    pub region_id: Option<DbId>,
    pub manga_id: Option<DbId>,
}
