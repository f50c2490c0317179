//! Route definition for Open Graph preview extraction.

use axum::routing::get;
use axum::Router;

use crate::handlers::og;
use crate::state::AppState;

/// Mounts `GET /get-og-data`.
pub fn router() -> Router<AppState> {
    Router::new().route("/get-og-data", get(og::get_og_data))
}
