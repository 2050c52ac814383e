//! Repository for the `packs` table.
//!
//! Every query is scoped by the owning user's id; a pack owned by someone
//! else is indistinguishable from a pack that does not exist.

use promptpack_core::types::DbId;
use sqlx::PgPool;

use crate::models::pack::{CreatePack, Pack, UpdatePack};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, title, description, number_prompts, created_at, updated_at";

/// Provides CRUD operations for packs.
pub struct PackRepo;

impl PackRepo {
    /// Insert a new pack owned by `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreatePack,
    ) -> Result<Pack, sqlx::Error> {
        let query = format!(
            "INSERT INTO packs (user_id, title, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pack>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// List all packs owned by `user_id`, most recently created first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Pack>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM packs WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Pack>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a pack by id, scoped to its owner.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Pack>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM packs WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Pack>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a pack. Only non-`None` fields in `input` are applied; the
    /// `updated_at` column is stamped on every call.
    ///
    /// Returns `None` if the pack does not exist or is not owned by `user_id`.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdatePack,
    ) -> Result<Option<Pack>, sqlx::Error> {
        let query = format!(
            "UPDATE packs SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pack>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a pack by id. The store cascades the delete to the pack's
    /// prompts and their versions. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM packs WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
