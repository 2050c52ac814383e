//! Handlers for prompt version snapshots.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use promptpack_core::error::CoreError;
use promptpack_core::types::DbId;
use promptpack_db::models::prompt_version::{CreatePromptVersion, PromptVersion};
use promptpack_db::repositories::{PromptRepo, PromptVersionRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/prompts/{prompt_id}/versions
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(prompt_id): Path<DbId>,
) -> AppResult<Json<Vec<PromptVersion>>> {
    PromptRepo::find_by_id(&state.pool, auth_user.user_id, prompt_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id: prompt_id,
        }))?;

    let versions =
        PromptVersionRepo::list_for_prompt(&state.pool, auth_user.user_id, prompt_id).await?;
    Ok(Json(versions))
}

/// POST /api/v1/prompts/{prompt_id}/versions
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(prompt_id): Path<DbId>,
    Json(input): Json<CreatePromptVersion>,
) -> AppResult<(StatusCode, Json<PromptVersion>)> {
    input.validate()?;

    PromptRepo::find_by_id(&state.pool, auth_user.user_id, prompt_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id: prompt_id,
        }))?;

    let version =
        PromptVersionRepo::create(&state.pool, auth_user.user_id, prompt_id, &input).await?;
    Ok((StatusCode::CREATED, Json(version)))
}

/// DELETE /api/v1/prompts/{prompt_id}/versions/{version_id}
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((prompt_id, version_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted =
        PromptVersionRepo::delete(&state.pool, auth_user.user_id, prompt_id, version_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "PromptVersion",
            id: version_id,
        }))
    }
}
