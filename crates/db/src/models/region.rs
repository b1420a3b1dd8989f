//! Region entity model and DTOs.

use grandline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::island::IslandResponse;

/// A row from the `regions` table.
#[derive(Debug, Clone, FromRow)]
pub struct Region {
    pub id: DbId,
    pub name: String,
    pub manga_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRegion {
    pub name: String,
    pub manga_id: Option<DbId>,
}

/// API shape of a region with the islands that reference it.
#[derive(Debug, Clone, Serialize)]
pub struct RegionResponse {
    pub id: DbId,
    pub name: String,
    pub manga_id: Option<DbId>,
    pub islands: Vec<IslandResponse>,
}
