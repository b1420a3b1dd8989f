//! Repository for the `regions` table.

use grandline_core::pagination::PageRequest;
use grandline_core::types::DbId;
use sqlx::PgPool;

use crate::models::region::{CreateRegion, Region};

const COLUMNS: &str = "id, name, manga_id, created_at, updated_at";

/// Provides CRUD operations for regions plus a batched lookup by id.
pub struct RegionRepo;

impl RegionRepo {
    pub async fn create(pool: &PgPool, input: &CreateRegion) -> Result<Region, sqlx::Error> {
        let query = format!(
            "INSERT INTO regions (name, manga_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Region>(&query)
            .bind(&input.name)
            .bind(input.manga_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Region>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM regions WHERE id = $1");
        sqlx::query_as::<_, Region>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch every region whose id is in `ids`. Unknown ids are skipped.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Region>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM regions WHERE id = ANY($1)");
        sqlx::query_as::<_, Region>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    pub async fn list(pool: &PgPool, page: &PageRequest) -> Result<Vec<Region>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM regions ORDER BY id ASC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Region>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Full replace. Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateRegion,
    ) -> Result<Option<Region>, sqlx::Error> {
        let query = format!(
            "UPDATE regions SET name = $2, manga_id = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Region>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.manga_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a region. Islands and characters keep their `region_id`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM regions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
