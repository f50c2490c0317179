//! Handlers for the `/entrevistas` resource (oral-history interviews).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tecnica_core::error::CoreError;
use tecnica_core::types::DbId;
use tecnica_db::models::entrevista::{CreateEntrevista, Entrevista, UpdateEntrevista};
use tecnica_db::repositories::EntrevistaRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{ensure_owner_or_admin, RequireAdmin, RequireAuth};
use crate::query::{IncludeDeletedParams, SearchParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/entrevistas -- published interviews.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Entrevista>>>> {
    let entrevistas = EntrevistaRepo::list_publicadas(&state.pool).await?;
    Ok(Json(DataResponse { data: entrevistas }))
}

/// GET /api/entrevistas/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<Entrevista>>>> {
    let entrevistas = match params.q.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => EntrevistaRepo::search(&state.pool, term).await?,
        _ => Vec::new(),
    };
    Ok(Json(DataResponse { data: entrevistas }))
}

/// GET /api/entrevistas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Entrevista>>> {
    let entrevista = EntrevistaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Entrevista",
            id,
        }))?;
    Ok(Json(DataResponse { data: entrevista }))
}

/// POST /api/entrevistas (any authenticated user; actor stamped as owner)
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(input): Json<CreateEntrevista>,
) -> AppResult<(StatusCode, Json<DataResponse<Entrevista>>)> {
    input.validate()?;
    let entrevista = EntrevistaRepo::create(&state.pool, &input, user.usuario_id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: entrevista })))
}

/// PUT /api/entrevistas/{id} (owner or admin)
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEntrevista>,
) -> AppResult<Json<DataResponse<Entrevista>>> {
    let existing = EntrevistaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Entrevista",
            id,
        }))?;
    ensure_owner_or_admin(&user, existing.created_by_uid)?;

    let entrevista = EntrevistaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Entrevista",
            id,
        }))?;
    Ok(Json(DataResponse { data: entrevista }))
}

/// DELETE /api/entrevistas/{id} (owner or admin, soft delete)
pub async fn soft_delete(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = EntrevistaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Entrevista",
            id,
        }))?;
    ensure_owner_or_admin(&user, existing.created_by_uid)?;

    EntrevistaRepo::soft_delete(&state.pool, id, user.usuario_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/entrevistas/{id}/restore (admin only)
pub async fn restore(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Entrevista>>> {
    let restored = EntrevistaRepo::restore(&state.pool, id).await?;
    if !restored {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Entrevista",
            id,
        }));
    }
    let entrevista = EntrevistaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Entrevista",
            id,
        }))?;
    Ok(Json(DataResponse { data: entrevista }))
}

/// GET /api/user/entrevistas -- the caller's own rows, drafts included.
pub async fn list_mine(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<Entrevista>>>> {
    let entrevistas = EntrevistaRepo::list_by_owner(&state.pool, user.usuario_id).await?;
    Ok(Json(DataResponse { data: entrevistas }))
}

/// GET /api/admin/entrevistas?includeDeleted= (admin only)
pub async fn list_admin(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<IncludeDeletedParams>,
) -> AppResult<Json<DataResponse<Vec<Entrevista>>>> {
    let entrevistas = EntrevistaRepo::list(&state.pool, params.include_deleted).await?;
    Ok(Json(DataResponse { data: entrevistas }))
}
