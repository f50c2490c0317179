//! Route definitions for entrevistas.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::entrevistas;
use crate::state::AppState;

/// Routes mounted at `/entrevistas`.
///
/// ```text
/// GET    /              -> list (published)
/// POST   /              -> create (auth)
/// GET    /search        -> search
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update (owner or admin)
/// DELETE /{id}          -> soft_delete (owner or admin)
/// POST   /{id}/restore  -> restore (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(entrevistas::list).post(entrevistas::create))
        .route("/search", get(entrevistas::search))
        .route(
            "/{id}",
            get(entrevistas::get_by_id)
                .put(entrevistas::update)
                .delete(entrevistas::soft_delete),
        )
        .route("/{id}/restore", post(entrevistas::restore))
}
