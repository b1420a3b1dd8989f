//! Haki and haki type models and DTOs.

use grandline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `haki_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HakiType {
    pub id: DbId,
    pub name: String,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
    #[serde(skip_serializing)]
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateHakiType {
    pub name: String,
}

/// A row from the `haki` table.
#[derive(Debug, Clone, FromRow)]
pub struct Haki {
    pub id: DbId,
    pub name: String,
    pub type_id: Option<DbId>,
    pub manga_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateHaki {
    pub name: String,
    pub type_id: DbId,
    pub manga_id: Option<DbId>,
}

/// API shape of a haki: keeps `type_id` and adds the resolved type name.
#[derive(Debug, Clone, Serialize)]
pub struct HakiResponse {
    pub id: DbId,
    pub name: String,
    pub type_id: Option<DbId>,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub manga_id: Option<DbId>,
}
