//! Handlers that call the generative provider.
//!
//! Generation returns content to the caller without persisting anything;
//! rating persists the validated score through the gateway and returns the
//! refreshed row. Provider failures are surfaced once with the raw message
//! and never retried.

use axum::extract::{Path, State};
use axum::Json;
use promptpack_core::error::CoreError;
use promptpack_core::types::DbId;
use promptpack_db::models::prompt::Prompt;
use promptpack_db::models::prompt_version::PromptVersion;
use promptpack_db::repositories::{PromptRepo, PromptVersionRepo};
use promptpack_genai::GeneratedContent;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /ai/generate`.
///
/// Both fields may be empty: an empty `content` means "write this from the
/// title alone".
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub title: String,
    pub content: String,
}

/// POST /api/v1/ai/generate
///
/// Produce an expanded/improved version of the given content. Nothing is
/// persisted; the caller decides what to do with the result.
pub async fn generate(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Json(input): Json<GenerateRequest>,
) -> AppResult<Json<GeneratedContent>> {
    let output = state
        .genai
        .generate_content(&input.title, &input.content)
        .await?;
    Ok(Json(output))
}

/// POST /api/v1/prompts/{id}/rate
///
/// Score the prompt's current content for clarity and persist the rating.
/// An out-of-range or non-integer provider reply fails before any write.
pub async fn rate_prompt(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Prompt>> {
    let prompt = PromptRepo::find_by_id(&state.pool, auth_user.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }))?;

    let rating = state.genai.rate_clarity(&prompt.content).await?;

    let prompt = PromptRepo::update_rating(&state.pool, auth_user.user_id, id, rating.rating)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }))?;

    tracing::info!(prompt_id = %id, rating = rating.rating, "Persisted clarity rating");
    Ok(Json(prompt))
}

/// POST /api/v1/prompts/{prompt_id}/versions/{version_id}/rate
///
/// Same as prompt rating, for a single version snapshot.
pub async fn rate_version(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((prompt_id, version_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<PromptVersion>> {
    let version =
        PromptVersionRepo::find_by_id(&state.pool, auth_user.user_id, prompt_id, version_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "PromptVersion",
                id: version_id,
            }))?;

    let rating = state.genai.rate_clarity(&version.content).await?;

    let version = PromptVersionRepo::update_rating(
        &state.pool,
        auth_user.user_id,
        prompt_id,
        version_id,
        rating.rating,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "PromptVersion",
        id: version_id,
    }))?;

    Ok(Json(version))
}
