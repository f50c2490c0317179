//! Route composition.

pub mod admin;
pub mod auth;
pub mod entrevistas;
pub mod health;
pub mod noticias;
pub mod og;
pub mod organizaciones;
pub mod personas;
pub mod proyectos;
pub mod registro;
pub mod temas;
pub mod trash;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                         login (public)
/// /auth/refresh                       refresh (public)
/// /auth/logout                        logout (requires auth)
///
/// /registro                           self-registration (public)
/// /get-og-data                        Open Graph preview (public)
///
/// /personas                           public directory; detail; search
/// /noticias                           published feed; detail; search; CRUD
/// /proyectos                          published list; detail; search; CRUD
/// /organizaciones                     list (?estadoVerificacion=); CRUD
/// /temas                              list; detail; search; CRUD (admin)
/// /entrevistas                        published list; detail; search; CRUD
///
/// /{entity}/{id}/temas                topic links (noticias, proyectos, personas)
///
/// /user/perfil                        own profile
/// /user/noticias                      own rows, drafts included
/// /user/proyectos
/// /user/entrevistas
/// /user/organizaciones
///
/// /admin/{entity}?includeDeleted=     privileged lists (admin only)
///
/// /trash                              unified trash (admin only)
/// /trash/purge-preview
/// /trash/purge
/// /trash/{entity_type}/{id}/restore
/// /trash/{entity_type}/{id}/purge
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(registro::router())
        .merge(og::router())
        .nest("/personas", personas::router())
        .nest("/noticias", noticias::router())
        .nest("/proyectos", proyectos::router())
        .nest("/organizaciones", organizaciones::router())
        .nest("/temas", temas::router())
        .nest("/entrevistas", entrevistas::router())
        .nest("/user", user::router())
        .nest("/admin", admin::router())
        .nest("/trash", trash::router())
}
