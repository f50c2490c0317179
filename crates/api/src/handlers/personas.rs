//! Handlers for the `/personas` resource.
//!
//! Profiles are created through `/api/registro`; there is no standalone
//! create endpoint. The public directory only lists active profiles with
//! public visibility. A persona is editable by its own usuario or an admin,
//! and the admin-managed fields (`activo`, `esAdmin`, `estadoVerificacion`)
//! are stripped from non-admin updates.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tecnica_core::error::CoreError;
use tecnica_core::types::DbId;
use tecnica_db::models::persona::{Persona, UpdatePersona};
use tecnica_db::repositories::PersonaRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{ensure_owner_or_admin, RequireAdmin, RequireAuth};
use crate::query::{IncludeDeletedParams, SearchParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/personas -- public directory.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Persona>>>> {
    let personas = PersonaRepo::list_publicas(&state.pool).await?;
    Ok(Json(DataResponse { data: personas }))
}

/// GET /api/personas/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<Persona>>>> {
    let personas = match params.q.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => PersonaRepo::search(&state.pool, term).await?,
        _ => Vec::new(),
    };
    Ok(Json(DataResponse { data: personas }))
}

/// GET /api/personas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Persona>>> {
    let persona = PersonaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Persona",
            id,
        }))?;
    Ok(Json(DataResponse { data: persona }))
}

/// GET /api/user/perfil -- the caller's own profile.
pub async fn get_own_profile(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Persona>>> {
    let persona = PersonaRepo::find_by_usuario_id(&state.pool, user.usuario_id)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!("No persona profile for usuario {}", user.usuario_id))
        })?;
    Ok(Json(DataResponse { data: persona }))
}

/// PUT /api/personas/{id} (the persona themselves or admin)
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdatePersona>,
) -> AppResult<Json<DataResponse<Persona>>> {
    let existing = PersonaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Persona",
            id,
        }))?;
    ensure_owner_or_admin(&user, Some(existing.usuario_id))?;

    // Admin-managed fields never pass through from regular members.
    if !user.is_admin() {
        input.activo = None;
        input.es_admin = None;
        input.estado_verificacion = None;
    }

    let persona = PersonaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Persona",
            id,
        }))?;
    Ok(Json(DataResponse { data: persona }))
}

/// DELETE /api/personas/{id} (the persona themselves or admin, soft delete)
pub async fn soft_delete(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = PersonaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Persona",
            id,
        }))?;
    ensure_owner_or_admin(&user, Some(existing.usuario_id))?;

    PersonaRepo::soft_delete(&state.pool, id, user.usuario_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/personas/{id}/restore (admin only)
pub async fn restore(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Persona>>> {
    let restored = PersonaRepo::restore(&state.pool, id).await?;
    if !restored {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Persona",
            id,
        }));
    }
    let persona = PersonaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Persona",
            id,
        }))?;
    Ok(Json(DataResponse { data: persona }))
}

/// GET /api/admin/personas?includeDeleted= (admin only)
///
/// Unlike the public directory, this lists every profile regardless of
/// visibility or active state.
pub async fn list_admin(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<IncludeDeletedParams>,
) -> AppResult<Json<DataResponse<Vec<Persona>>>> {
    let personas = PersonaRepo::list(&state.pool, params.include_deleted).await?;
    Ok(Json(DataResponse { data: personas }))
}
