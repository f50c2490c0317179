//! Handlers for the `/trash` resource (admin only).
//!
//! Provides a unified trash / bin API that spans all soft-deletable entity
//! types: listing trashed items, restoring them, previewing a purge, and
//! hard-deleting (purging) individual or all trashed records.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use sqlx::PgPool;
use tecnica_core::error::CoreError;
use tecnica_core::types::DbId;
use tecnica_db::repositories::tema_vinculo_repo::is_linkable_entity_type;
use tecnica_db::repositories::trash_repo::{
    is_known_entity_type, PurgePreview, TrashRepo, TrashSummary,
};
use tecnica_db::repositories::{
    EntrevistaRepo, NoticiaRepo, OrganizacionRepo, PersonaRepo, ProyectoRepo, TemaRepo,
    TemaVinculoRepo,
};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the trash listing endpoint.
#[derive(Debug, Deserialize)]
pub struct TrashQuery {
    /// Optional entity type filter (e.g. "noticias", "temas").
    #[serde(rename = "type")]
    pub entity_type: Option<String>,
}

/// GET /api/trash
///
/// List all soft-deleted items, optionally filtered by entity type.
pub async fn list_trashed(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<TrashQuery>,
) -> AppResult<Json<DataResponse<TrashSummary>>> {
    if let Some(ref et) = params.entity_type {
        validate_entity_type(et)?;
    }
    let summary = TrashRepo::list_trashed(&state.pool, params.entity_type.as_deref()).await?;
    Ok(Json(DataResponse { data: summary }))
}

/// POST /api/trash/{entity_type}/{id}/restore
///
/// Restore a soft-deleted entity of any type. Returns 404 if the entity is
/// not in the trash.
pub async fn restore(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path((entity_type, id)): Path<(String, DbId)>,
) -> AppResult<Json<serde_json::Value>> {
    validate_entity_type(&entity_type)?;

    let restored = dispatch_restore(&state.pool, &entity_type, id).await?;

    if restored {
        Ok(Json(serde_json::json!({
            "data": {
                "restored": true,
                "entityType": entity_type,
                "id": id,
            }
        })))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "TrashedItem",
            id,
        }))
    }
}

/// GET /api/trash/purge-preview
///
/// Preview how many rows a purge-all would remove, broken down by entity type.
pub async fn purge_preview(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<PurgePreview>>> {
    let preview = TrashRepo::purge_preview(&state.pool).await?;
    Ok(Json(DataResponse { data: preview }))
}

/// DELETE /api/trash/purge
///
/// Hard-delete all soft-deleted records across every entity table.
pub async fn purge_all(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<StatusCode> {
    TrashRepo::purge_all(&state.pool).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/trash/{entity_type}/{id}/purge
///
/// Hard-delete a single soft-deleted record.
pub async fn purge_one(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path((entity_type, id)): Path<(String, DbId)>,
) -> AppResult<StatusCode> {
    validate_entity_type(&entity_type)?;
    let deleted = TrashRepo::purge_one(&state.pool, &entity_type, id).await?;
    if deleted {
        // The junction table has no FK on entity_id; sweep the purged
        // entity's topic links explicitly.
        if is_linkable_entity_type(&entity_type) {
            TemaVinculoRepo::delete_for_entity(&state.pool, &entity_type, id).await?;
        }
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "TrashedItem",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Validate that `entity_type` is one of the known soft-deletable types.
fn validate_entity_type(entity_type: &str) -> AppResult<()> {
    if is_known_entity_type(entity_type) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Unknown entity type: {entity_type}"
        )))
    }
}

/// Dispatch a restore call to the correct entity repository.
///
/// Returns `true` if a row was restored, `false` if the entity was not in
/// the trash.
async fn dispatch_restore(pool: &PgPool, entity_type: &str, id: DbId) -> AppResult<bool> {
    let restored = match entity_type {
        "personas" => PersonaRepo::restore(pool, id).await?,
        "noticias" => NoticiaRepo::restore(pool, id).await?,
        "proyectos" => ProyectoRepo::restore(pool, id).await?,
        "organizaciones" => OrganizacionRepo::restore(pool, id).await?,
        "temas" => TemaRepo::restore(pool, id).await?,
        "entrevistas" => EntrevistaRepo::restore(pool, id).await?,
        // validate_entity_type runs first, so this is unreachable
        _ => false,
    };
    Ok(restored)
}
