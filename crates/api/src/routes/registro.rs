//! Route definition for public self-registration.

use axum::routing::post;
use axum::Router;

use crate::handlers::registro;
use crate::state::AppState;

/// Mounts `POST /registro`.
pub fn router() -> Router<AppState> {
    Router::new().route("/registro", post(registro::registro))
}
