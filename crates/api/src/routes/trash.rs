//! Route definitions for the unified trash / bin (admin only).

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::trash;
use crate::state::AppState;

/// Routes mounted at `/trash`.
///
/// ```text
/// GET    /                               -> list (?type=entity_type)
/// GET    /purge-preview                  -> purge preview
/// DELETE /purge                          -> purge all
/// POST   /{entity_type}/{id}/restore     -> restore one
/// DELETE /{entity_type}/{id}/purge       -> purge one
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trash::list_trashed))
        .route("/purge-preview", get(trash::purge_preview))
        .route("/purge", delete(trash::purge_all))
        .route("/{entity_type}/{id}/restore", post(trash::restore))
        .route("/{entity_type}/{id}/purge", delete(trash::purge_one))
}
