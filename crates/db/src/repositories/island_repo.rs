//! Repository for the `islands` table.

use grandline_core::pagination::PageRequest;
use grandline_core::types::DbId;
use sqlx::PgPool;

use crate::models::island::{CreateIsland, Island};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, region_id, manga_id, created_at, updated_at";

/// Provides CRUD operations for islands plus the per-region lookup.
pub struct IslandRepo;

impl IslandRepo {
    pub async fn create(pool: &PgPool, input: &CreateIsland) -> Result<Island, sqlx::Error> {
        let query = format!(
            "INSERT INTO islands (name, region_id, manga_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Island>(&query)
            .bind(&input.name)
            .bind(input.region_id)
            .bind(input.manga_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Island>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM islands WHERE id = $1");
        sqlx::query_as::<_, Island>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of islands in creation order.
    pub async fn list(pool: &PgPool, page: &PageRequest) -> Result<Vec<Island>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM islands ORDER BY id ASC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Island>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// All islands located in any of `region_ids`, in creation order.
    pub async fn list_by_region_ids(
        pool: &PgPool,
        region_ids: &[DbId],
    ) -> Result<Vec<Island>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM islands
             WHERE region_id = ANY($1)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Island>(&query)
            .bind(region_ids)
            .fetch_all(pool)
            .await
    }

    /// Full replace. Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateIsland,
    ) -> Result<Option<Island>, sqlx::Error> {
        let query = format!(
            "UPDATE islands SET
                name = $2,
                region_id = $3,
                manga_id = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Island>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.region_id)
            .bind(input.manga_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM islands WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
