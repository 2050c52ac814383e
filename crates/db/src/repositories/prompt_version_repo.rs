//! Repository for the `prompt_versions` table.

use promptpack_core::types::DbId;
use sqlx::PgPool;

use crate::models::prompt_version::{CreatePromptVersion, PromptVersion};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, prompt_id, user_id, content, rating, is_accepted, created_at";

/// Provides operations for version snapshots. Versions are append-only:
/// there is no content update, only rating writes and deletes.
pub struct PromptVersionRepo;

impl PromptVersionRepo {
    /// Insert a new version snapshot for a prompt the caller owns.
    ///
    /// Callers verify prompt ownership first (via `PromptRepo::find_by_id`);
    /// this insert only stamps the owning `user_id` onto the row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        prompt_id: DbId,
        input: &CreatePromptVersion,
    ) -> Result<PromptVersion, sqlx::Error> {
        let query = format!(
            "INSERT INTO prompt_versions (prompt_id, user_id, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PromptVersion>(&query)
            .bind(prompt_id)
            .bind(user_id)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// List all versions of a prompt owned by `user_id`, most recent first.
    pub async fn list_for_prompt(
        pool: &PgPool,
        user_id: DbId,
        prompt_id: DbId,
    ) -> Result<Vec<PromptVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prompt_versions
             WHERE prompt_id = $1 AND user_id = $2
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, PromptVersion>(&query)
            .bind(prompt_id)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a version by id, scoped to its prompt and owner.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        prompt_id: DbId,
        id: DbId,
    ) -> Result<Option<PromptVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prompt_versions
             WHERE id = $1 AND prompt_id = $2 AND user_id = $3"
        );
        sqlx::query_as::<_, PromptVersion>(&query)
            .bind(id)
            .bind(prompt_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Persist a clarity rating for a version.
    pub async fn update_rating(
        pool: &PgPool,
        user_id: DbId,
        prompt_id: DbId,
        id: DbId,
        rating: i32,
    ) -> Result<Option<PromptVersion>, sqlx::Error> {
        let query = format!(
            "UPDATE prompt_versions SET rating = $4
             WHERE id = $1 AND prompt_id = $2 AND user_id = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PromptVersion>(&query)
            .bind(id)
            .bind(prompt_id)
            .bind(user_id)
            .bind(rating)
            .fetch_optional(pool)
            .await
    }

    /// Delete a version by id. Returns `true` if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        user_id: DbId,
        prompt_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM prompt_versions WHERE id = $1 AND prompt_id = $2 AND user_id = $3",
        )
        .bind(id)
        .bind(prompt_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
