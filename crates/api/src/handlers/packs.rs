//! Handlers for the `/packs` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use promptpack_core::error::CoreError;
use promptpack_core::types::DbId;
use promptpack_db::models::pack::{CreatePack, Pack, UpdatePack};
use promptpack_db::repositories::PackRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/packs
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreatePack>,
) -> AppResult<(StatusCode, Json<Pack>)> {
    input.validate()?;
    let pack = PackRepo::create(&state.pool, auth_user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(pack)))
}

/// GET /api/v1/packs
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<Pack>>> {
    let packs = PackRepo::list_for_user(&state.pool, auth_user.user_id).await?;
    Ok(Json(packs))
}

/// GET /api/v1/packs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Pack>> {
    let pack = PackRepo::find_by_id(&state.pool, auth_user.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Pack", id }))?;
    Ok(Json(pack))
}

/// PUT /api/v1/packs/{id}
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePack>,
) -> AppResult<Json<Pack>> {
    input.validate()?;
    let pack = PackRepo::update(&state.pool, auth_user.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Pack", id }))?;
    Ok(Json(pack))
}

/// DELETE /api/v1/packs/{id}
///
/// The store cascades the delete through prompts to versions.
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PackRepo::delete(&state.pool, auth_user.user_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Pack", id }))
    }
}
