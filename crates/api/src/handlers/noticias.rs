//! Handlers for the `/noticias` resource.
//!
//! Public readers only see published entries; the owner dashboard
//! (`/user/noticias`) also shows drafts. Mutations are owner-or-admin.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tecnica_core::error::CoreError;
use tecnica_core::search::{
    clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT,
};
use tecnica_core::types::DbId;
use tecnica_db::models::noticia::{CreateNoticia, Noticia, UpdateNoticia};
use tecnica_db::repositories::NoticiaRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{ensure_owner_or_admin, RequireAdmin, RequireAuth};
use crate::query::{IncludeDeletedParams, PaginationParams, SearchParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/noticias?limit=&offset= -- published entries, newest first.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Noticia>>>> {
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(params.offset);
    let noticias = NoticiaRepo::list_publicadas(&state.pool, limit, offset).await?;
    Ok(Json(DataResponse { data: noticias }))
}

/// GET /api/noticias/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<Noticia>>>> {
    let noticias = match params.q.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => NoticiaRepo::search(&state.pool, term).await?,
        _ => Vec::new(),
    };
    Ok(Json(DataResponse { data: noticias }))
}

/// GET /api/noticias/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Noticia>>> {
    let noticia = NoticiaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Noticia",
            id,
        }))?;
    Ok(Json(DataResponse { data: noticia }))
}

/// POST /api/noticias (any authenticated user; actor stamped as owner)
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(input): Json<CreateNoticia>,
) -> AppResult<(StatusCode, Json<DataResponse<Noticia>>)> {
    input.validate()?;
    let noticia = NoticiaRepo::create(&state.pool, &input, user.usuario_id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: noticia })))
}

/// PUT /api/noticias/{id} (owner or admin)
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNoticia>,
) -> AppResult<Json<DataResponse<Noticia>>> {
    let existing = NoticiaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Noticia",
            id,
        }))?;
    ensure_owner_or_admin(&user, existing.created_by_uid)?;

    let noticia = NoticiaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Noticia",
            id,
        }))?;
    Ok(Json(DataResponse { data: noticia }))
}

/// DELETE /api/noticias/{id} (owner or admin, soft delete)
pub async fn soft_delete(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = NoticiaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Noticia",
            id,
        }))?;
    ensure_owner_or_admin(&user, existing.created_by_uid)?;

    NoticiaRepo::soft_delete(&state.pool, id, user.usuario_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/noticias/{id}/restore (admin only)
pub async fn restore(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Noticia>>> {
    let restored = NoticiaRepo::restore(&state.pool, id).await?;
    if !restored {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Noticia",
            id,
        }));
    }
    let noticia = NoticiaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Noticia",
            id,
        }))?;
    Ok(Json(DataResponse { data: noticia }))
}

/// GET /api/user/noticias -- the caller's own rows, drafts included.
pub async fn list_mine(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<Noticia>>>> {
    let noticias = NoticiaRepo::list_by_owner(&state.pool, user.usuario_id).await?;
    Ok(Json(DataResponse { data: noticias }))
}

/// GET /api/admin/noticias?includeDeleted= (admin only)
pub async fn list_admin(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<IncludeDeletedParams>,
) -> AppResult<Json<DataResponse<Vec<Noticia>>>> {
    let noticias = NoticiaRepo::list(&state.pool, params.include_deleted).await?;
    Ok(Json(DataResponse { data: noticias }))
}
