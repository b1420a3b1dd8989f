//! Crew entity model and DTOs.

use grandline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::boat::BoatResponse;
use crate::models::character::Character;

/// A row from the `crews` table.
#[derive(Debug, Clone, FromRow)]
pub struct Crew {
    pub id: DbId,
    pub name: String,
    pub flag: Option<String>,
    pub manga_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCrew {
    pub name: String,
    pub flag: Option<String>,
    pub manga_id: Option<DbId>,
}

/// API shape of a crew with its boats and members attached.
#[derive(Debug, Clone, Serialize)]
pub struct CrewResponse {
    pub id: DbId,
    pub name: String,
    pub flag: Option<String>,
    pub manga_id: Option<DbId>,
    pub boats: Vec<BoatResponse>,
    pub members: Vec<Character>,
}
