//! Route definitions for temas.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::temas;
use crate::state::AppState;

/// Routes mounted at `/temas`.
///
/// ```text
/// GET    /              -> list (public)
/// POST   /              -> create (admin)
/// GET    /search        -> search
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update (admin)
/// DELETE /{id}          -> soft_delete (admin)
/// POST   /{id}/restore  -> restore (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(temas::list).post(temas::create))
        .route("/search", get(temas::search))
        .route(
            "/{id}",
            get(temas::get_by_id)
                .put(temas::update)
                .delete(temas::soft_delete),
        )
        .route("/{id}/restore", post(temas::restore))
}
