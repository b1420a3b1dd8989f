//! Boat entity model and DTOs.

use grandline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `boats` table.
#[derive(Debug, Clone, FromRow)]
pub struct Boat {
    pub id: DbId,
    pub name: String,
    pub crew_id: Option<DbId>,
    pub manga_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBoat {
    pub name: String,
    pub crew_id: DbId,
    pub manga_id: Option<DbId>,
}

/// API shape of a boat: the owning crew is flattened to its name.
#[derive(Debug, Clone, Serialize)]
pub struct BoatResponse {
    pub id: DbId,
    pub name: String,
    pub crew: Option<String>,
    pub manga_id: Option<DbId>,
}
