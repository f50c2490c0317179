//! Route definitions for the admin dashboard lists.
//!
//! Every handler behind these routes takes [`RequireAdmin`], so a non-admin
//! caller gets a 403 before any data is fetched.
//!
//! [`RequireAdmin`]: crate::middleware::rbac::RequireAdmin

use axum::routing::get;
use axum::Router;

use crate::handlers::{entrevistas, noticias, organizaciones, personas, proyectos, temas};
use crate::state::AppState;

/// Routes mounted at `/admin`. All support `?includeDeleted=`.
///
/// ```text
/// GET /personas         -> every profile, any visibility
/// GET /noticias         -> every entry, any state
/// GET /proyectos        -> every project, any status
/// GET /organizaciones   -> every organization (?estadoVerificacion=)
/// GET /temas            -> every tema
/// GET /entrevistas      -> every interview
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/personas", get(personas::list_admin))
        .route("/noticias", get(noticias::list_admin))
        .route("/proyectos", get(proyectos::list_admin))
        .route("/organizaciones", get(organizaciones::list_admin))
        .route("/temas", get(temas::list_admin))
        .route("/entrevistas", get(entrevistas::list_admin))
}
