//! Route definitions for the public persona directory.
//!
//! Profile creation happens through `/registro`, so there is no POST here.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{personas, temas};
use crate::state::AppState;

/// Routes mounted at `/personas`.
///
/// ```text
/// GET    /              -> list (public directory)
/// GET    /search        -> search
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update (self or admin)
/// DELETE /{id}          -> soft_delete (self or admin)
/// POST   /{id}/restore  -> restore (admin)
/// GET    /{id}/temas    -> topic links
/// PUT    /{id}/temas    -> replace topic links (self or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(personas::list))
        .route("/search", get(personas::search))
        .route(
            "/{id}",
            get(personas::get_by_id)
                .put(personas::update)
                .delete(personas::soft_delete),
        )
        .route("/{id}/restore", post(personas::restore))
        .route(
            "/{id}/temas",
            get(temas::list_for_persona).put(temas::set_for_persona),
        )
}
