//! Proyecto model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tecnica_core::types::{DbId, Timestamp};
use validator::Validate;

/// Publication state of a proyecto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "proyecto_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProyectoStatus {
    Draft,
    Published,
    Archived,
}

/// A row from the `proyectos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Proyecto {
    pub id: DbId,
    pub titulo: String,
    pub descripcion: Option<String>,
    pub status: ProyectoStatus,
    pub archivo_principal_url: Option<String>,
    pub created_by_uid: Option<DbId>,
    pub deleted_by_uid: Option<DbId>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a proyecto. New rows default to `draft`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProyecto {
    #[validate(length(min = 3, message = "titulo debe tener al menos 3 caracteres"))]
    pub titulo: String,
    pub descripcion: Option<String>,
    pub status: Option<ProyectoStatus>,
    #[validate(url(message = "archivoPrincipalUrl debe ser una URL valida"))]
    pub archivo_principal_url: Option<String>,
}

/// DTO for updating a proyecto. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProyecto {
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
    pub status: Option<ProyectoStatus>,
    pub archivo_principal_url: Option<String>,
}
