//! Repository for the `haki_types` table.

use grandline_core::pagination::PageRequest;
use grandline_core::types::DbId;
use sqlx::PgPool;

use crate::models::haki::{CreateHakiType, HakiType};

const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for haki types plus a batched lookup by id.
pub struct HakiTypeRepo;

impl HakiTypeRepo {
    /// Insert a new haki type, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateHakiType) -> Result<HakiType, sqlx::Error> {
        let query = format!(
            "INSERT INTO haki_types (name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HakiType>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HakiType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM haki_types WHERE id = $1");
        sqlx::query_as::<_, HakiType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch every row whose id is in `ids`. Unknown ids are skipped.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<HakiType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM haki_types WHERE id = ANY($1)");
        sqlx::query_as::<_, HakiType>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List one page of haki types in creation order.
    pub async fn list(pool: &PgPool, page: &PageRequest) -> Result<Vec<HakiType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM haki_types ORDER BY id ASC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, HakiType>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Overwrite the name. Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateHakiType,
    ) -> Result<Option<HakiType>, sqlx::Error> {
        let query = format!(
            "UPDATE haki_types SET name = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HakiType>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a haki type. Rows still pointing at it keep the stale `type_id`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM haki_types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
