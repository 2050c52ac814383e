//! Pack entity model and DTOs.

use promptpack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A pack row from the `packs` table.
///
/// `number_prompts` is denormalized and maintained by database triggers.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Pack {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub number_prompts: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new pack.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePack {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
}

/// DTO for updating an existing pack. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePack {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
    pub description: Option<String>,
}
