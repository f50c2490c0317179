//! Handlers for the `/proyectos` resource.
//!
//! Public readers only see published projects. Mutations are owner-or-admin.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tecnica_core::error::CoreError;
use tecnica_core::types::DbId;
use tecnica_db::models::proyecto::{CreateProyecto, Proyecto, UpdateProyecto};
use tecnica_db::repositories::ProyectoRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{ensure_owner_or_admin, RequireAdmin, RequireAuth};
use crate::query::{IncludeDeletedParams, SearchParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/proyectos -- published projects.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Proyecto>>>> {
    let proyectos = ProyectoRepo::list_published(&state.pool).await?;
    Ok(Json(DataResponse { data: proyectos }))
}

/// GET /api/proyectos/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<Proyecto>>>> {
    let proyectos = match params.q.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => ProyectoRepo::search(&state.pool, term).await?,
        _ => Vec::new(),
    };
    Ok(Json(DataResponse { data: proyectos }))
}

/// GET /api/proyectos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Proyecto>>> {
    let proyecto = ProyectoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Proyecto",
            id,
        }))?;
    Ok(Json(DataResponse { data: proyecto }))
}

/// POST /api/proyectos (any authenticated user; actor stamped as owner)
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(input): Json<CreateProyecto>,
) -> AppResult<(StatusCode, Json<DataResponse<Proyecto>>)> {
    input.validate()?;
    let proyecto = ProyectoRepo::create(&state.pool, &input, user.usuario_id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: proyecto })))
}

/// PUT /api/proyectos/{id} (owner or admin)
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProyecto>,
) -> AppResult<Json<DataResponse<Proyecto>>> {
    let existing = ProyectoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Proyecto",
            id,
        }))?;
    ensure_owner_or_admin(&user, existing.created_by_uid)?;

    let proyecto = ProyectoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Proyecto",
            id,
        }))?;
    Ok(Json(DataResponse { data: proyecto }))
}

/// DELETE /api/proyectos/{id} (owner or admin, soft delete)
pub async fn soft_delete(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = ProyectoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Proyecto",
            id,
        }))?;
    ensure_owner_or_admin(&user, existing.created_by_uid)?;

    ProyectoRepo::soft_delete(&state.pool, id, user.usuario_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/proyectos/{id}/restore (admin only)
pub async fn restore(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Proyecto>>> {
    let restored = ProyectoRepo::restore(&state.pool, id).await?;
    if !restored {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Proyecto",
            id,
        }));
    }
    let proyecto = ProyectoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Proyecto",
            id,
        }))?;
    Ok(Json(DataResponse { data: proyecto }))
}

/// GET /api/user/proyectos -- the caller's own rows, drafts included.
pub async fn list_mine(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<Proyecto>>>> {
    let proyectos = ProyectoRepo::list_by_owner(&state.pool, user.usuario_id).await?;
    Ok(Json(DataResponse { data: proyectos }))
}

/// GET /api/admin/proyectos?includeDeleted= (admin only)
pub async fn list_admin(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<IncludeDeletedParams>,
) -> AppResult<Json<DataResponse<Vec<Proyecto>>>> {
    let proyectos = ProyectoRepo::list(&state.pool, params.include_deleted).await?;
    Ok(Json(DataResponse { data: proyectos }))
}
