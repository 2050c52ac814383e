//! Prompt version (immutable content snapshot) model and DTOs.

use promptpack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A version row from the `prompt_versions` table.
///
/// Versions are append-only: content is never edited after insert. The
/// `is_accepted` flag is part of the persisted shape but unused by handlers.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PromptVersion {
    pub id: DbId,
    pub prompt_id: DbId,
    pub user_id: DbId,
    pub content: String,
    pub rating: Option<i32>,
    pub is_accepted: Option<bool>,
    pub created_at: Timestamp,
}

/// DTO for creating a new version snapshot.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePromptVersion {
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}
