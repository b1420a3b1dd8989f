//! Repository for the `haki` table.

use grandline_core::pagination::PageRequest;
use grandline_core::types::DbId;
use sqlx::PgPool;

use crate::models::haki::{CreateHaki, Haki};

const COLUMNS: &str = "id, name, type_id, manga_id, created_at, updated_at";

pub struct HakiRepo;

impl HakiRepo {
    pub async fn create(pool: &PgPool, input: &CreateHaki) -> Result<Haki, sqlx::Error> {
        let query = format!(
            "INSERT INTO haki (name, type_id, manga_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Haki>(&query)
            .bind(&input.name)
            .bind(input.type_id)
            .bind(input.manga_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Haki>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM haki WHERE id = $1");
        sqlx::query_as::<_, Haki>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, page: &PageRequest) -> Result<Vec<Haki>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM haki ORDER BY id ASC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Haki>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Full replace. Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateHaki,
    ) -> Result<Option<Haki>, sqlx::Error> {
        let query = format!(
            "UPDATE haki SET
                name = $2,
                type_id = $3,
                manga_id = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Haki>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.type_id)
            .bind(input.manga_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM haki WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
