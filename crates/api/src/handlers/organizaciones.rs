//! Handlers for the `/organizaciones` resource.
//!
//! Verification ("pending" subsets) is filtered server-side via
//! `?estadoVerificacion=`; changing the verification state itself is
//! admin-only.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tecnica_core::error::CoreError;
use tecnica_core::types::DbId;
use tecnica_db::models::estado::EstadoVerificacion;
use tecnica_db::models::organizacion::{CreateOrganizacion, Organizacion, UpdateOrganizacion};
use tecnica_db::repositories::OrganizacionRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{ensure_owner_or_admin, RequireAdmin, RequireAuth};
use crate::query::{SearchParams, VerificacionParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the admin organizacion list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminListParams {
    #[serde(default)]
    pub include_deleted: bool,
    pub estado_verificacion: Option<EstadoVerificacion>,
}

/// GET /api/organizaciones?estadoVerificacion=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<VerificacionParams>,
) -> AppResult<Json<DataResponse<Vec<Organizacion>>>> {
    let organizaciones =
        OrganizacionRepo::list(&state.pool, false, params.estado_verificacion).await?;
    Ok(Json(DataResponse {
        data: organizaciones,
    }))
}

/// GET /api/organizaciones/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<Organizacion>>>> {
    let organizaciones = match params.q.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => OrganizacionRepo::search(&state.pool, term).await?,
        _ => Vec::new(),
    };
    Ok(Json(DataResponse {
        data: organizaciones,
    }))
}

/// GET /api/organizaciones/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Organizacion>>> {
    let organizacion = OrganizacionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Organizacion",
            id,
        }))?;
    Ok(Json(DataResponse { data: organizacion }))
}

/// POST /api/organizaciones (any authenticated user; actor stamped as owner)
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(input): Json<CreateOrganizacion>,
) -> AppResult<(StatusCode, Json<DataResponse<Organizacion>>)> {
    input.validate()?;
    let organizacion = OrganizacionRepo::create(&state.pool, &input, user.usuario_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: organizacion }),
    ))
}

/// PUT /api/organizaciones/{id} (owner or admin)
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateOrganizacion>,
) -> AppResult<Json<DataResponse<Organizacion>>> {
    let existing = OrganizacionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Organizacion",
            id,
        }))?;
    ensure_owner_or_admin(&user, existing.created_by_uid)?;

    // Only admins change verification state.
    if !user.is_admin() {
        input.estado_verificacion = None;
    }

    let organizacion = OrganizacionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Organizacion",
            id,
        }))?;
    Ok(Json(DataResponse { data: organizacion }))
}

/// DELETE /api/organizaciones/{id} (owner or admin, soft delete)
pub async fn soft_delete(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = OrganizacionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Organizacion",
            id,
        }))?;
    ensure_owner_or_admin(&user, existing.created_by_uid)?;

    OrganizacionRepo::soft_delete(&state.pool, id, user.usuario_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/organizaciones/{id}/restore (admin only)
pub async fn restore(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Organizacion>>> {
    let restored = OrganizacionRepo::restore(&state.pool, id).await?;
    if !restored {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Organizacion",
            id,
        }));
    }
    let organizacion = OrganizacionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Organizacion",
            id,
        }))?;
    Ok(Json(DataResponse { data: organizacion }))
}

/// GET /api/user/organizaciones -- organizations registered by the caller.
pub async fn list_mine(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<Organizacion>>>> {
    let organizaciones = OrganizacionRepo::list_by_owner(&state.pool, user.usuario_id).await?;
    Ok(Json(DataResponse {
        data: organizaciones,
    }))
}

/// GET /api/admin/organizaciones?includeDeleted=&estadoVerificacion= (admin only)
pub async fn list_admin(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<AdminListParams>,
) -> AppResult<Json<DataResponse<Vec<Organizacion>>>> {
    let organizaciones = OrganizacionRepo::list(
        &state.pool,
        params.include_deleted,
        params.estado_verificacion,
    )
    .await?;
    Ok(Json(DataResponse {
        data: organizaciones,
    }))
}
