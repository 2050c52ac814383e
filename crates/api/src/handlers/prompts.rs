//! Handlers for the `/prompts` resource and pack-scoped prompt listing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use promptpack_core::error::CoreError;
use promptpack_core::types::DbId;
use promptpack_db::models::pack::Pack;
use promptpack_db::models::prompt::{CreatePrompt, Prompt, UpdatePrompt};
use promptpack_db::models::prompt_version::PromptVersion;
use promptpack_db::repositories::{PackRepo, PromptRepo, PromptVersionRepo};
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Full detail view of a prompt: the prompt itself, its owning pack, and its
/// version history.
#[derive(Debug, Serialize)]
pub struct PromptDetail {
    pub prompt: Prompt,
    pub pack: Pack,
    pub versions: Vec<PromptVersion>,
}

/// GET /api/v1/packs/{pack_id}/prompts
pub async fn list_by_pack(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(pack_id): Path<DbId>,
) -> AppResult<Json<Vec<Prompt>>> {
    // A missing or foreign pack is a 404, not an empty list.
    PackRepo::find_by_id(&state.pool, auth_user.user_id, pack_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Pack",
            id: pack_id,
        }))?;

    let prompts = PromptRepo::list_for_pack(&state.pool, auth_user.user_id, pack_id).await?;
    Ok(Json(prompts))
}

/// POST /api/v1/packs/{pack_id}/prompts
///
/// Creates the prompt and its initial version atomically.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(pack_id): Path<DbId>,
    Json(input): Json<CreatePrompt>,
) -> AppResult<(StatusCode, Json<Prompt>)> {
    input.validate()?;

    PackRepo::find_by_id(&state.pool, auth_user.user_id, pack_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Pack",
            id: pack_id,
        }))?;

    let prompt =
        PromptRepo::create_with_initial_version(&state.pool, auth_user.user_id, pack_id, &input)
            .await?;
    Ok((StatusCode::CREATED, Json(prompt)))
}

/// GET /api/v1/prompts/{id}
///
/// Returns the prompt together with its pack and version history. The pack
/// read and the version list run concurrently; if either fails the whole
/// request fails.
pub async fn get_detail(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<PromptDetail>> {
    let prompt = PromptRepo::find_by_id(&state.pool, auth_user.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }))?;

    let (pack, versions) = tokio::try_join!(
        PackRepo::find_by_id(&state.pool, auth_user.user_id, prompt.pack_id),
        PromptVersionRepo::list_for_prompt(&state.pool, auth_user.user_id, prompt.id),
    )?;

    let pack = pack.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Pack",
        id: prompt.pack_id,
    }))?;

    Ok(Json(PromptDetail {
        prompt,
        pack,
        versions,
    }))
}

/// PUT /api/v1/prompts/{id}
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePrompt>,
) -> AppResult<Json<Prompt>> {
    input.validate()?;
    let prompt = PromptRepo::update(&state.pool, auth_user.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }))?;
    Ok(Json(prompt))
}

/// DELETE /api/v1/prompts/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PromptRepo::delete(&state.pool, auth_user.user_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }))
    }
}
