//! Handlers for the `/temas` resource and topic links.
//!
//! Temas are shared taxonomy, so mutations are admin-only; reading is
//! public. Topic links (`/{entity}/{id}/temas`) are managed by the owner
//! of the linked entity (or an admin).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tecnica_core::error::CoreError;
use tecnica_core::types::DbId;
use tecnica_db::models::tema::{CreateTema, Tema, TemaInfo, UpdateTema};
use tecnica_db::repositories::{NoticiaRepo, PersonaRepo, ProyectoRepo, TemaRepo, TemaVinculoRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{ensure_owner_or_admin, RequireAdmin, RequireAuth};
use crate::query::{IncludeDeletedParams, SearchParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// CRUD handlers
// ---------------------------------------------------------------------------

/// GET /api/temas
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Tema>>>> {
    let temas = TemaRepo::list(&state.pool, false).await?;
    Ok(Json(DataResponse { data: temas }))
}

/// GET /api/temas/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<Tema>>>> {
    let temas = match params.q.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => TemaRepo::search(&state.pool, term).await?,
        _ => Vec::new(),
    };
    Ok(Json(DataResponse { data: temas }))
}

/// GET /api/temas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Tema>>> {
    let tema = TemaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tema", id }))?;
    Ok(Json(DataResponse { data: tema }))
}

/// POST /api/temas (admin only)
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateTema>,
) -> AppResult<(StatusCode, Json<DataResponse<Tema>>)> {
    input.validate()?;
    let tema = TemaRepo::create(&state.pool, &input, admin.usuario_id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: tema })))
}

/// PUT /api/temas/{id} (admin only)
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTema>,
) -> AppResult<Json<DataResponse<Tema>>> {
    let tema = TemaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tema", id }))?;
    Ok(Json(DataResponse { data: tema }))
}

/// DELETE /api/temas/{id} (admin only, soft delete)
pub async fn soft_delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TemaRepo::soft_delete(&state.pool, id, admin.usuario_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Tema", id }))
    }
}

/// POST /api/temas/{id}/restore (admin only)
pub async fn restore(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Tema>>> {
    let restored = TemaRepo::restore(&state.pool, id).await?;
    if !restored {
        return Err(AppError::Core(CoreError::NotFound { entity: "Tema", id }));
    }
    let tema = TemaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tema", id }))?;
    Ok(Json(DataResponse { data: tema }))
}

/// GET /api/admin/temas?includeDeleted= (admin only)
pub async fn list_admin(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<IncludeDeletedParams>,
) -> AppResult<Json<DataResponse<Vec<Tema>>>> {
    let temas = TemaRepo::list(&state.pool, params.include_deleted).await?;
    Ok(Json(DataResponse { data: temas }))
}

// ---------------------------------------------------------------------------
// Topic links
// ---------------------------------------------------------------------------

/// Request body for replacing an entity's topic links.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTemasRequest {
    pub tema_ids: Vec<DbId>,
}

/// GET /api/noticias/{id}/temas
pub async fn list_for_noticia(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<TemaInfo>>>> {
    list_links(&state, "noticias", id).await
}

/// PUT /api/noticias/{id}/temas (owner or admin)
pub async fn set_for_noticia(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
    Json(input): Json<SetTemasRequest>,
) -> AppResult<Json<DataResponse<Vec<TemaInfo>>>> {
    let noticia = NoticiaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Noticia",
            id,
        }))?;
    ensure_owner_or_admin(&user, noticia.created_by_uid)?;
    TemaVinculoRepo::set_for_entity(&state.pool, "noticias", id, &input.tema_ids, user.usuario_id)
        .await?;
    list_links(&state, "noticias", id).await
}

/// GET /api/proyectos/{id}/temas
pub async fn list_for_proyecto(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<TemaInfo>>>> {
    list_links(&state, "proyectos", id).await
}

/// PUT /api/proyectos/{id}/temas (owner or admin)
pub async fn set_for_proyecto(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
    Json(input): Json<SetTemasRequest>,
) -> AppResult<Json<DataResponse<Vec<TemaInfo>>>> {
    let proyecto = ProyectoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Proyecto",
            id,
        }))?;
    ensure_owner_or_admin(&user, proyecto.created_by_uid)?;
    TemaVinculoRepo::set_for_entity(&state.pool, "proyectos", id, &input.tema_ids, user.usuario_id)
        .await?;
    list_links(&state, "proyectos", id).await
}

/// GET /api/personas/{id}/temas
pub async fn list_for_persona(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<TemaInfo>>>> {
    list_links(&state, "personas", id).await
}

/// PUT /api/personas/{id}/temas (the persona themselves or admin)
pub async fn set_for_persona(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
    Json(input): Json<SetTemasRequest>,
) -> AppResult<Json<DataResponse<Vec<TemaInfo>>>> {
    let persona = PersonaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Persona",
            id,
        }))?;
    ensure_owner_or_admin(&user, Some(persona.usuario_id))?;
    TemaVinculoRepo::set_for_entity(&state.pool, "personas", id, &input.tema_ids, user.usuario_id)
        .await?;
    list_links(&state, "personas", id).await
}

async fn list_links(
    state: &AppState,
    entity_type: &str,
    id: DbId,
) -> AppResult<Json<DataResponse<Vec<TemaInfo>>>> {
    let temas = TemaVinculoRepo::list_for_entity(&state.pool, entity_type, id).await?;
    Ok(Json(DataResponse { data: temas }))
}
