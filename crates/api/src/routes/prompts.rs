//! Route definitions for the `/prompts` resource, including version
//! snapshots and clarity-rating endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{ai, prompts, versions};
use crate::state::AppState;

/// Routes mounted at `/prompts`.
///
/// ```text
/// GET    /{id}                             -> get_detail
/// PUT    /{id}                             -> update
/// DELETE /{id}                             -> delete
/// POST   /{id}/rate                        -> rate_prompt
///
/// GET    /{id}/versions                    -> versions::list
/// POST   /{id}/versions                    -> versions::create
/// DELETE /{id}/versions/{version_id}       -> versions::delete
/// POST   /{id}/versions/{version_id}/rate  -> rate_version
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(prompts::get_detail)
                .put(prompts::update)
                .delete(prompts::delete),
        )
        .route("/{id}/rate", post(ai::rate_prompt))
        .route(
            "/{id}/versions",
            get(versions::list).post(versions::create),
        )
        .route(
            "/{id}/versions/{version_id}",
            axum::routing::delete(versions::delete),
        )
        .route(
            "/{id}/versions/{version_id}/rate",
            post(ai::rate_version),
        )
}
