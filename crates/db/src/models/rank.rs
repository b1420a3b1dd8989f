//! Rank entity model and DTOs.

use grandline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `ranks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rank {
    pub id: DbId,
    pub name: String,
    pub manga_id: Option<DbId>,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
    #[serde(skip_serializing)]
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRank {
    pub name: String,
    pub manga_id: Option<DbId>,
}
