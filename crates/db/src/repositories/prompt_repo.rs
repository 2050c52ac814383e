//! Repository for the `prompts` table.
//!
//! All queries are scoped by the owning user's id, same discipline as
//! [`PackRepo`](crate::repositories::PackRepo).

use promptpack_core::types::DbId;
use sqlx::PgPool;

use crate::models::prompt::{CreatePrompt, Prompt, UpdatePrompt};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, pack_id, user_id, title, content, rating, number_versions, created_at, updated_at";

/// Provides CRUD operations for prompts.
pub struct PromptRepo;

impl PromptRepo {
    /// Insert a new prompt and its initial version in a single transaction.
    ///
    /// Every prompt starts life with exactly one version carrying the same
    /// content; running both inserts in one transaction rules out the
    /// prompt-without-initial-version state entirely. The returned row is
    /// re-read after the version insert so the trigger-maintained
    /// `number_versions` counter is already 1.
    pub async fn create_with_initial_version(
        pool: &PgPool,
        user_id: DbId,
        pack_id: DbId,
        input: &CreatePrompt,
    ) -> Result<Prompt, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert = format!(
            "INSERT INTO prompts (pack_id, user_id, title, content)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let prompt = sqlx::query_as::<_, Prompt>(&insert)
            .bind(pack_id)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO prompt_versions (prompt_id, user_id, content) VALUES ($1, $2, $3)",
        )
        .bind(prompt.id)
        .bind(user_id)
        .bind(&input.content)
        .execute(&mut *tx)
        .await?;

        let refetch = format!("SELECT {COLUMNS} FROM prompts WHERE id = $1");
        let prompt = sqlx::query_as::<_, Prompt>(&refetch)
            .bind(prompt.id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(prompt)
    }

    /// List all prompts in a pack owned by `user_id`, most recent first.
    pub async fn list_for_pack(
        pool: &PgPool,
        user_id: DbId,
        pack_id: DbId,
    ) -> Result<Vec<Prompt>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prompts
             WHERE pack_id = $1 AND user_id = $2
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(pack_id)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a prompt by id, scoped to its owner.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompts WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a prompt's title/content. Only non-`None` fields are applied;
    /// `updated_at` is stamped on every call.
    ///
    /// Returns `None` if the prompt does not exist or is not owned by
    /// `user_id`.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdatePrompt,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!(
            "UPDATE prompts SET
                title = COALESCE($3, title),
                content = COALESCE($4, content),
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Persist a clarity rating produced by the generative service.
    ///
    /// The caller has already range-validated `rating`; the CHECK constraint
    /// backstops it. Stamps `updated_at`.
    pub async fn update_rating(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        rating: i32,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!(
            "UPDATE prompts SET rating = $3, updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .bind(user_id)
            .bind(rating)
            .fetch_optional(pool)
            .await
    }

    /// Delete a prompt by id. Cascades to its versions. Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM prompts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
