//! Repository for the `manga` table.

use grandline_core::pagination::PageRequest;
use grandline_core::types::DbId;
use sqlx::PgPool;

use crate::models::manga::{CreateManga, Manga, UpdateManga};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, image, created_at, updated_at";

/// Provides create, read, and partial-update operations for manga.
///
/// There is no delete: series are never removed through the API.
pub struct MangaRepo;

impl MangaRepo {
    /// Insert a new manga, returning the created row.
    ///
    /// Fails with a unique violation on `uq_manga_name` for a duplicate name.
    pub async fn create(pool: &PgPool, input: &CreateManga) -> Result<Manga, sqlx::Error> {
        let query = format!(
            "INSERT INTO manga (name, image)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Manga>(&query)
            .bind(&input.name)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// Find a manga by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Manga>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM manga WHERE id = $1");
        sqlx::query_as::<_, Manga>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of manga in creation order.
    pub async fn list(pool: &PgPool, page: &PageRequest) -> Result<Vec<Manga>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM manga ORDER BY id ASC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Manga>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Update a manga. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateManga,
    ) -> Result<Option<Manga>, sqlx::Error> {
        let query = format!(
            "UPDATE manga SET
                name = COALESCE($2, name),
                image = COALESCE($3, image)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Manga>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }
}
