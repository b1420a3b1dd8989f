//! Repository for the `weapons` table.

use grandline_core::pagination::PageRequest;
use grandline_core::types::DbId;
use sqlx::PgPool;

use crate::models::weapon::{CreateWeapon, Weapon};

const COLUMNS: &str = "id, name, manga_id, created_at, updated_at";

pub struct WeaponRepo;

impl WeaponRepo {
    pub async fn create(pool: &PgPool, input: &CreateWeapon) -> Result<Weapon, sqlx::Error> {
        let query = format!(
            "INSERT INTO weapons (name, manga_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Weapon>(&query)
            .bind(&input.name)
            .bind(input.manga_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Weapon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM weapons WHERE id = $1");
        sqlx::query_as::<_, Weapon>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, page: &PageRequest) -> Result<Vec<Weapon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM weapons ORDER BY id ASC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Weapon>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Full replace. Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateWeapon,
    ) -> Result<Option<Weapon>, sqlx::Error> {
        let query = format!(
            "UPDATE weapons SET name = $2, manga_id = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Weapon>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.manga_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM weapons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
