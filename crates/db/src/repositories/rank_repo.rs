//! Repository for the `ranks` table.

use grandline_core::pagination::PageRequest;
use grandline_core::types::DbId;
use sqlx::PgPool;

use crate::models::rank::{CreateRank, Rank};

const COLUMNS: &str = "id, name, manga_id, created_at, updated_at";

pub struct RankRepo;

impl RankRepo {
    pub async fn create(pool: &PgPool, input: &CreateRank) -> Result<Rank, sqlx::Error> {
        let query = format!(
            "INSERT INTO ranks (name, manga_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rank>(&query)
            .bind(&input.name)
            .bind(input.manga_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Rank>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ranks WHERE id = $1");
        sqlx::query_as::<_, Rank>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, page: &PageRequest) -> Result<Vec<Rank>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ranks ORDER BY id ASC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Rank>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Full replace. Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateRank,
    ) -> Result<Option<Rank>, sqlx::Error> {
        let query = format!(
            "UPDATE ranks SET name = $2, manga_id = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rank>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.manga_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ranks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
