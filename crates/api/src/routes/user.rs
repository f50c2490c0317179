//! Route definitions for the per-user dashboard ("my rows").

use axum::routing::get;
use axum::Router;

use crate::handlers::{entrevistas, noticias, organizaciones, personas, proyectos};
use crate::state::AppState;

/// Routes mounted at `/user`. All require authentication.
///
/// ```text
/// GET /perfil          -> own persona profile
/// GET /noticias        -> own noticias, drafts included
/// GET /proyectos       -> own proyectos
/// GET /entrevistas     -> own entrevistas
/// GET /organizaciones  -> organizations registered by the caller
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/perfil", get(personas::get_own_profile))
        .route("/noticias", get(noticias::list_mine))
        .route("/proyectos", get(proyectos::list_mine))
        .route("/entrevistas", get(entrevistas::list_mine))
        .route("/organizaciones", get(organizaciones::list_mine))
}
