//! Row-to-response projections.
//!
//! Repositories return flat rows that reference other rows by id only.
//! The functions here resolve those ids with explicit batched lookups and
//! build the API shapes: referenced display names are flattened to strings
//! and child collections are attached. An id that does not resolve projects
//! to `null` or to an empty collection.

use std::collections::HashMap;

use grandline_core::types::DbId;
use grandline_db::models::boat::{Boat, BoatResponse};
use grandline_db::models::character::Character;
use grandline_db::models::crew::{Crew, CrewResponse};
use grandline_db::models::devil_fruit::{DevilFruit, DevilFruitResponse};
use grandline_db::models::haki::{Haki, HakiResponse};
use grandline_db::models::island::{Island, IslandResponse};
use grandline_db::models::region::{Region, RegionResponse};
use grandline_db::repositories::{
    BoatRepo, CharacterRepo, CrewRepo, DevilFruitTypeRepo, HakiTypeRepo, IslandRepo, RegionRepo,
};
use grandline_db::DbPool;

/// id -> display name of a referenced row.
pub type NameIndex = HashMap<DbId, String>;

/// Sorted, de-duplicated ids from a set of optional references.
pub fn distinct_ids(ids: impl IntoIterator<Item = Option<DbId>>) -> Vec<DbId> {
    let mut out: Vec<DbId> = ids.into_iter().flatten().collect();
    out.sort_unstable();
    out.dedup();
    out
}

fn lookup(names: &NameIndex, id: Option<DbId>) -> Option<String> {
    id.and_then(|id| names.get(&id).cloned())
}

/// Group rows by an optional parent id, dropping rows without one.
fn group_by<T>(rows: Vec<T>, key: impl Fn(&T) -> Option<DbId>) -> HashMap<DbId, Vec<T>> {
    let mut grouped: HashMap<DbId, Vec<T>> = HashMap::new();
    for row in rows {
        if let Some(parent) = key(&row) {
            grouped.entry(parent).or_default().push(row);
        }
    }
    grouped
}

// ---------------------------------------------------------------------------
// Devil fruits
// ---------------------------------------------------------------------------

pub fn devil_fruit_response(row: DevilFruit, type_names: &NameIndex) -> DevilFruitResponse {
    DevilFruitResponse {
        id: row.id,
        name: row.name,
        type_name: lookup(type_names, row.type_id),
        manga_id: row.manga_id,
    }
}

async fn devil_fruit_type_names(pool: &DbPool, ids: &[DbId]) -> Result<NameIndex, sqlx::Error> {
    if ids.is_empty() {
        return Ok(NameIndex::new());
    }
    let types = DevilFruitTypeRepo::find_by_ids(pool, ids).await?;
    Ok(types.into_iter().map(|t| (t.id, t.name)).collect())
}

pub async fn devil_fruit(
    pool: &DbPool,
    row: DevilFruit,
) -> Result<DevilFruitResponse, sqlx::Error> {
    let names = devil_fruit_type_names(pool, &distinct_ids([row.type_id])).await?;
    Ok(devil_fruit_response(row, &names))
}

pub async fn devil_fruits(
    pool: &DbPool,
    rows: Vec<DevilFruit>,
) -> Result<Vec<DevilFruitResponse>, sqlx::Error> {
    let names = devil_fruit_type_names(pool, &distinct_ids(rows.iter().map(|r| r.type_id))).await?;
    Ok(rows
        .into_iter()
        .map(|row| devil_fruit_response(row, &names))
        .collect())
}

// ---------------------------------------------------------------------------
// Haki
// ---------------------------------------------------------------------------

pub fn haki_response(row: Haki, type_names: &NameIndex) -> HakiResponse {
    HakiResponse {
        id: row.id,
        name: row.name,
        type_id: row.type_id,
        type_name: lookup(type_names, row.type_id),
        manga_id: row.manga_id,
    }
}

async fn haki_type_names(pool: &DbPool, ids: &[DbId]) -> Result<NameIndex, sqlx::Error> {
    if ids.is_empty() {
        return Ok(NameIndex::new());
    }
    let types = HakiTypeRepo::find_by_ids(pool, ids).await?;
    Ok(types.into_iter().map(|t| (t.id, t.name)).collect())
}

pub async fn haki(pool: &DbPool, row: Haki) -> Result<HakiResponse, sqlx::Error> {
    let names = haki_type_names(pool, &distinct_ids([row.type_id])).await?;
    Ok(haki_response(row, &names))
}

pub async fn haki_list(pool: &DbPool, rows: Vec<Haki>) -> Result<Vec<HakiResponse>, sqlx::Error> {
    let names = haki_type_names(pool, &distinct_ids(rows.iter().map(|r| r.type_id))).await?;
    Ok(rows.into_iter().map(|row| haki_response(row, &names)).collect())
}

// ---------------------------------------------------------------------------
// Boats
// ---------------------------------------------------------------------------

pub fn boat_response(row: Boat, crew_names: &NameIndex) -> BoatResponse {
    BoatResponse {
        id: row.id,
        name: row.name,
        crew: lookup(crew_names, row.crew_id),
        manga_id: row.manga_id,
    }
}

async fn crew_names(pool: &DbPool, ids: &[DbId]) -> Result<NameIndex, sqlx::Error> {
    if ids.is_empty() {
        return Ok(NameIndex::new());
    }
    let crews = CrewRepo::find_by_ids(pool, ids).await?;
    Ok(crews.into_iter().map(|c| (c.id, c.name)).collect())
}

pub async fn boat(pool: &DbPool, row: Boat) -> Result<BoatResponse, sqlx::Error> {
    let names = crew_names(pool, &distinct_ids([row.crew_id])).await?;
    Ok(boat_response(row, &names))
}

pub async fn boats(pool: &DbPool, rows: Vec<Boat>) -> Result<Vec<BoatResponse>, sqlx::Error> {
    let names = crew_names(pool, &distinct_ids(rows.iter().map(|r| r.crew_id))).await?;
    Ok(rows.into_iter().map(|row| boat_response(row, &names)).collect())
}

// ---------------------------------------------------------------------------
// Islands
// ---------------------------------------------------------------------------

pub fn island_response(row: Island, region_names: &NameIndex) -> IslandResponse {
    IslandResponse {
        id: row.id,
        name: row.name,
        region: lookup(region_names, row.region_id),
        manga_id: row.manga_id,
    }
}

async fn region_names(pool: &DbPool, ids: &[DbId]) -> Result<NameIndex, sqlx::Error> {
    if ids.is_empty() {
        return Ok(NameIndex::new());
    }
    let regions = RegionRepo::find_by_ids(pool, ids).await?;
    Ok(regions.into_iter().map(|r| (r.id, r.name)).collect())
}

pub async fn island(pool: &DbPool, row: Island) -> Result<IslandResponse, sqlx::Error> {
    let names = region_names(pool, &distinct_ids([row.region_id])).await?;
    Ok(island_response(row, &names))
}

pub async fn islands(pool: &DbPool, rows: Vec<Island>) -> Result<Vec<IslandResponse>, sqlx::Error> {
    let names = region_names(pool, &distinct_ids(rows.iter().map(|r| r.region_id))).await?;
    Ok(rows
        .into_iter()
        .map(|row| island_response(row, &names))
        .collect())
}

// ---------------------------------------------------------------------------
// Crews (with boats and members)
// ---------------------------------------------------------------------------

/// Boats and members of a set of crews, keyed by crew id.
#[derive(Debug, Default)]
pub struct CrewChildren {
    pub boats: HashMap<DbId, Vec<Boat>>,
    pub members: HashMap<DbId, Vec<Character>>,
}

async fn crew_children(pool: &DbPool, crew_ids: &[DbId]) -> Result<CrewChildren, sqlx::Error> {
    if crew_ids.is_empty() {
        return Ok(CrewChildren::default());
    }
    let boats = BoatRepo::list_by_crew_ids(pool, crew_ids).await?;
    let members = CharacterRepo::list_by_crew_ids(pool, crew_ids).await?;
    Ok(CrewChildren {
        boats: group_by(boats, |b| b.crew_id),
        members: group_by(members, |c| c.crew_id),
    })
}

pub fn crew_response(crew: Crew, children: &mut CrewChildren) -> CrewResponse {
    let boats = children
        .boats
        .remove(&crew.id)
        .unwrap_or_default()
        .into_iter()
        .map(|b| BoatResponse {
            id: b.id,
            name: b.name,
            crew: Some(crew.name.clone()),
            manga_id: b.manga_id,
        })
        .collect();
    let members = children.members.remove(&crew.id).unwrap_or_default();

    CrewResponse {
        id: crew.id,
        name: crew.name,
        flag: crew.flag,
        manga_id: crew.manga_id,
        boats,
        members,
    }
}

pub async fn crew(pool: &DbPool, row: Crew) -> Result<CrewResponse, sqlx::Error> {
    let mut children = crew_children(pool, &[row.id]).await?;
    Ok(crew_response(row, &mut children))
}

pub async fn crews(pool: &DbPool, rows: Vec<Crew>) -> Result<Vec<CrewResponse>, sqlx::Error> {
    let ids: Vec<DbId> = rows.iter().map(|c| c.id).collect();
    let mut children = crew_children(pool, &ids).await?;
    Ok(rows
        .into_iter()
        .map(|row| crew_response(row, &mut children))
        .collect())
}

// ---------------------------------------------------------------------------
// Regions (with islands)
// ---------------------------------------------------------------------------

pub fn region_response(region: Region, islands: &mut HashMap<DbId, Vec<Island>>) -> RegionResponse {
    let islands = islands
        .remove(&region.id)
        .unwrap_or_default()
        .into_iter()
        .map(|i| IslandResponse {
            id: i.id,
            name: i.name,
            region: Some(region.name.clone()),
            manga_id: i.manga_id,
        })
        .collect();

    RegionResponse {
        id: region.id,
        name: region.name,
        manga_id: region.manga_id,
        islands,
    }
}

async fn region_islands(
    pool: &DbPool,
    region_ids: &[DbId],
) -> Result<HashMap<DbId, Vec<Island>>, sqlx::Error> {
    if region_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let islands = IslandRepo::list_by_region_ids(pool, region_ids).await?;
    Ok(group_by(islands, |i| i.region_id))
}

pub async fn region(pool: &DbPool, row: Region) -> Result<RegionResponse, sqlx::Error> {
    let mut islands = region_islands(pool, &[row.id]).await?;
    Ok(region_response(row, &mut islands))
}

pub async fn regions(pool: &DbPool, rows: Vec<Region>) -> Result<Vec<RegionResponse>, sqlx::Error> {
    let ids: Vec<DbId> = rows.iter().map(|r| r.id).collect();
    let mut islands = region_islands(pool, &ids).await?;
    Ok(rows
        .into_iter()
        .map(|row| region_response(row, &mut islands))
        .collect())
}
