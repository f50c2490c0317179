//! Tema (topic) model, DTOs, and topic-link projections.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tecnica_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `temas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tema {
    pub id: DbId,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub categoria_tema: Option<String>,
    pub created_by_uid: Option<DbId>,
    pub deleted_by_uid: Option<DbId>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Lightweight tema info returned when listing the topics of an entity.
/// Avoids fetching audit columns the caller does not need.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemaInfo {
    pub id: DbId,
    pub nombre: String,
    pub categoria_tema: Option<String>,
}

/// DTO for creating a tema.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTema {
    #[validate(length(min = 2, message = "nombre debe tener al menos 2 caracteres"))]
    pub nombre: String,
    pub descripcion: Option<String>,
    pub categoria_tema: Option<String>,
}

/// DTO for updating a tema. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTema {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub categoria_tema: Option<String>,
}
