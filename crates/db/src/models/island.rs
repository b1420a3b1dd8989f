//! Island entity model and DTOs.

use grandline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `islands` table.
#[derive(Debug, Clone, FromRow)]
pub struct Island {
    pub id: DbId,
    pub name: String,
    pub region_id: Option<DbId>,
    pub manga_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateIsland {
    pub name: String,
    pub region_id: DbId,
    pub manga_id: Option<DbId>,
}

/// API shape of an island: the region is flattened to its name.
#[derive(Debug, Clone, Serialize)]
pub struct IslandResponse {
    pub id: DbId,
    pub name: String,
    pub region: Option<String>,
    pub manga_id: Option<DbId>,
}
