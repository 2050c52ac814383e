//! Route definitions for the `/packs` resource.
//!
//! Also nests pack-scoped prompt routes under `/packs/{id}/prompts`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{packs, prompts};
use crate::state::AppState;

/// Routes mounted at `/packs`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
///
/// GET    /{id}/prompts            -> list_by_pack
/// POST   /{id}/prompts            -> create (prompt + initial version)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(packs::list).post(packs::create))
        .route(
            "/{id}",
            get(packs::get_by_id).put(packs::update).delete(packs::delete),
        )
        .route(
            "/{id}/prompts",
            get(prompts::list_by_pack).post(prompts::create),
        )
}
