//! Repository for the `devil_fruits` table.

use grandline_core::pagination::PageRequest;
use grandline_core::types::DbId;
use sqlx::PgPool;

use crate::models::devil_fruit::{CreateDevilFruit, DevilFruit};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, type_id, manga_id, created_at, updated_at";

/// Provides CRUD operations for devil fruits.
///
/// Rows carry only `type_id`; the type's display name is resolved by the
/// caller through [`DevilFruitTypeRepo`](super::DevilFruitTypeRepo).
pub struct DevilFruitRepo;

impl DevilFruitRepo {
    /// Insert a new devil fruit, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDevilFruit,
    ) -> Result<DevilFruit, sqlx::Error> {
        let query = format!(
            "INSERT INTO devil_fruits (name, type_id, manga_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DevilFruit>(&query)
            .bind(&input.name)
            .bind(input.type_id)
            .bind(input.manga_id)
            .fetch_one(pool)
            .await
    }

    /// Find a devil fruit by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<DevilFruit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM devil_fruits WHERE id = $1");
        sqlx::query_as::<_, DevilFruit>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of devil fruits in creation order.
    pub async fn list(pool: &PgPool, page: &PageRequest) -> Result<Vec<DevilFruit>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM devil_fruits ORDER BY id ASC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, DevilFruit>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Overwrite name, type, and manga. Returns `None` if the row does not exist.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateDevilFruit,
    ) -> Result<Option<DevilFruit>, sqlx::Error> {
        let query = format!(
            "UPDATE devil_fruits SET
                name = $2,
                type_id = $3,
                manga_id = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DevilFruit>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.type_id)
            .bind(input.manga_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a devil fruit. Characters holding its id are left untouched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM devil_fruits WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
