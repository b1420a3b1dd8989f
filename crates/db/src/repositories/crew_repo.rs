//! Repository for the `crews` table.

use grandline_core::pagination::PageRequest;
use grandline_core::types::DbId;
use sqlx::PgPool;

use crate::models::crew::{CreateCrew, Crew};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, flag, manga_id, created_at, updated_at";

/// Provides CRUD operations for crews plus a batched lookup by id.
pub struct CrewRepo;

impl CrewRepo {
    /// Insert a new crew, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCrew) -> Result<Crew, sqlx::Error> {
        let query = format!(
            "INSERT INTO crews (name, flag, manga_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Crew>(&query)
            .bind(&input.name)
            .bind(&input.flag)
            .bind(input.manga_id)
            .fetch_one(pool)
            .await
    }

    /// Find a crew by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Crew>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM crews WHERE id = $1");
        sqlx::query_as::<_, Crew>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch every crew whose id is in `ids`. Unknown ids are skipped.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Crew>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM crews WHERE id = ANY($1)");
        sqlx::query_as::<_, Crew>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List one page of crews in creation order.
    pub async fn list(pool: &PgPool, page: &PageRequest) -> Result<Vec<Crew>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM crews ORDER BY id ASC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Crew>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Overwrite every column. A missing `flag` is written as NULL.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateCrew,
    ) -> Result<Option<Crew>, sqlx::Error> {
        let query = format!(
            "UPDATE crews SET
                name = $2,
                flag = $3,
                manga_id = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Crew>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.flag)
            .bind(input.manga_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a crew. Boats and members keep their `crew_id`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM crews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
