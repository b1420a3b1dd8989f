//! Repository for the `characters` table.

use grandline_core::pagination::PageRequest;
use grandline_core::types::DbId;
use sqlx::PgPool;

use crate::models::character::{Character, CreateCharacter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, strength, devil_fruit_id, crew_id, haki_id, weapon_id, \
                       rank_id, island_id, region_id, manga_id, created_at, updated_at";

/// Provides CRUD operations for characters plus the crew-membership lookup.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row.
    ///
    /// Reference ids are stored as given; none of them is checked.
    pub async fn create(pool: &PgPool, input: &CreateCharacter) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters (name, strength, devil_fruit_id, crew_id, haki_id,
                                     weapon_id, rank_id, island_id, region_id, manga_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(input.strength)
            .bind(input.devil_fruit_id)
            .bind(input.crew_id)
            .bind(input.haki_id)
            .bind(input.weapon_id)
            .bind(input.rank_id)
            .bind(input.island_id)
            .bind(input.region_id)
            .bind(input.manga_id)
            .fetch_one(pool)
            .await
    }

    /// Find a character by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of characters in creation order.
    pub async fn list(pool: &PgPool, page: &PageRequest) -> Result<Vec<Character>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM characters ORDER BY id ASC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Character>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// All characters whose `crew_id` is one of `crew_ids`, in creation order.
    pub async fn list_by_crew_ids(
        pool: &PgPool,
        crew_ids: &[DbId],
    ) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM characters
             WHERE crew_id = ANY($1)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(crew_ids)
            .fetch_all(pool)
            .await
    }

    /// Overwrite every column of a character with `input`.
    ///
    /// Optional fields missing from `input` are written as NULL.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "UPDATE characters SET
                name = $2,
                strength = $3,
                devil_fruit_id = $4,
                crew_id = $5,
                haki_id = $6,
                weapon_id = $7,
                rank_id = $8,
                island_id = $9,
                region_id = $10,
                manga_id = $11
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.strength)
            .bind(input.devil_fruit_id)
            .bind(input.crew_id)
            .bind(input.haki_id)
            .bind(input.weapon_id)
            .bind(input.rank_id)
            .bind(input.island_id)
            .bind(input.region_id)
            .bind(input.manga_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a character by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
