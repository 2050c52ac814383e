pub mod ai;
pub mod auth;
pub mod health;
pub mod packs;
pub mod profile;
pub mod prompts;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
/// /auth/me                                         current identity
///
/// /profile                                         get, update username
///
/// /packs                                           list, create
/// /packs/{id}                                      get, update, delete
/// /packs/{pack_id}/prompts                         list, create (+ initial version)
///
/// /prompts/{id}                                    detail (pack + versions), update, delete
/// /prompts/{id}/rate                               clarity-score the prompt (POST)
/// /prompts/{prompt_id}/versions                    list, create
/// /prompts/{prompt_id}/versions/{version_id}       delete
/// /prompts/{prompt_id}/versions/{version_id}/rate  clarity-score a version (POST)
///
/// /ai/generate                                     generate prompt content (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/profile", profile::router())
        .nest("/packs", packs::router())
        .nest("/prompts", prompts::router())
        .nest("/ai", ai::router())
}
