//! Handlers for the `/profile` resource.

use axum::extract::State;
use axum::Json;
use promptpack_core::error::CoreError;
use promptpack_db::models::user::{PublicUser, UpdateProfile};
use promptpack_db::repositories::UserRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<PublicUser>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;
    Ok(Json(user.into()))
}

/// PUT /api/v1/profile
///
/// Change the caller's username. The profile row is the authoritative record;
/// token identity follows on the next `/auth/me` read. A duplicate username
/// surfaces as 409 "Username is already taken".
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<PublicUser>> {
    input.validate()?;

    let user = UserRepo::update_username(&state.pool, auth_user.user_id, &input.username)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;

    Ok(Json(user.into()))
}
