//! Route definitions for noticias.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{noticias, temas};
use crate::state::AppState;

/// Routes mounted at `/noticias`.
///
/// ```text
/// GET    /              -> list (published feed)
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
        .route("/", get(noticias::list).post(noticias::create))
        .route("/search", get(noticias::search))
        .route(
            "/{id}",
            get(noticias::get_by_id)
                .put(noticias::update)
                .delete(noticias::soft_delete),
        )
        .route("/{id}/restore", post(noticias::restore))
        .route(
            "/{id}/temas",
            get(temas::list_for_noticia).put(temas::set_for_noticia),
        )
}
