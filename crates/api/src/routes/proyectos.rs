//! Route definitions for proyectos.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{proyectos, temas};
use crate::state::AppState;

/// Routes mounted at `/proyectos`.
///
/// ```text
/// GET    /              -> list (published)
/// POST   /              -> create (auth)
/// GET    /search        -> search
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update (owner or admin)
/// DELETE /{id}          -> soft_delete (owner or admin)
/// POST   /{id}/restore  -> restore (admin)
/// GET    /{id}/temas    -> topic links
/// PUT    /{id}/temas    -> replace topic links (owner or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(proyectos::list).post(proyectos::create))
        .route("/search", get(proyectos::search))
        .route(
            "/{id}",
            get(proyectos::get_by_id)
                .put(proyectos::update)
                .delete(proyectos::soft_delete),
        )
        .route("/{id}/restore", post(proyectos::restore))
        .route(
            "/{id}/temas",
            get(temas::list_for_proyecto).put(temas::set_for_proyecto),
        )
}
