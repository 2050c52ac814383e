//! Prompt entity model and DTOs.

use promptpack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A prompt row from the `prompts` table.
///
/// `rating` is only ever written from the clarity-scoring endpoint; users
/// cannot submit it. `number_versions` is trigger-maintained.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Prompt {
    pub id: DbId,
    pub pack_id: DbId,
    pub user_id: DbId,
    pub title: Option<String>,
    pub content: String,
    pub rating: Option<i32>,
    pub number_versions: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new prompt. Creation always records an initial version
/// carrying the same content, so `title` and `content` are both required here
/// even though the `title` column is nullable.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePrompt {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}

/// DTO for updating an existing prompt.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePrompt {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: Option<String>,
}
