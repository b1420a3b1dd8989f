//! Repository for the `boats` table.

use grandline_core::pagination::PageRequest;
use grandline_core::types::DbId;
use sqlx::PgPool;

use crate::models::boat::{Boat, CreateBoat};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, crew_id, manga_id, created_at, updated_at";

/// Provides CRUD operations for boats plus the per-crew fleet lookup.
pub struct BoatRepo;

impl BoatRepo {
    pub async fn create(pool: &PgPool, input: &CreateBoat) -> Result<Boat, sqlx::Error> {
        let query = format!(
            "INSERT INTO boats (name, crew_id, manga_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Boat>(&query)
            .bind(&input.name)
            .bind(input.crew_id)
            .bind(input.manga_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Boat>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM boats WHERE id = $1");
        sqlx::query_as::<_, Boat>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of boats in creation order.
    pub async fn list(pool: &PgPool, page: &PageRequest) -> Result<Vec<Boat>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM boats ORDER BY id ASC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Boat>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// All boats owned by any of `crew_ids`, in creation order.
    pub async fn list_by_crew_ids(
        pool: &PgPool,
        crew_ids: &[DbId],
    ) -> Result<Vec<Boat>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM boats
             WHERE crew_id = ANY($1)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Boat>(&query)
            .bind(crew_ids)
            .fetch_all(pool)
            .await
    }

    /// Full replace. Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateBoat,
    ) -> Result<Option<Boat>, sqlx::Error> {
        let query = format!(
            "UPDATE boats SET
                name = $2,
                crew_id = $3,
                manga_id = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Boat>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.crew_id)
            .bind(input.manga_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM boats WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
