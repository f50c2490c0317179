//! Route definitions for organizaciones.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::organizaciones;
use crate::state::AppState;

/// Routes mounted at `/organizaciones`.
///
/// ```text
/// GET    /              -> list (?estadoVerificacion=)
/// POST   /              -> create (auth)
/// GET    /search        -> search
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update (owner or admin)
/// DELETE /{id}          -> soft_delete (owner or admin)
/// POST   /{id}/restore  -> restore (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(organizaciones::list).post(organizaciones::create),
        )
        .route("/search", get(organizaciones::search))
        .route(
            "/{id}",
            get(organizaciones::get_by_id)
                .put(organizaciones::update)
                .delete(organizaciones::soft_delete),
        )
        .route("/{id}/restore", post(organizaciones::restore))
}
