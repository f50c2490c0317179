//! Entrevista (oral-history interview) model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tecnica_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::models::estado::EstadoPublicacion;

/// Media kind of an interview record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "entrevista_contenido", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EntrevistaContenido {
    Video,
    Audio,
    Texto,
}

/// A row from the `entrevistas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entrevista {
    pub id: DbId,
    pub titulo: String,
    pub descripcion: Option<String>,
    pub tipo_contenido: EntrevistaContenido,
    pub estado: EstadoPublicacion,
    /// Date the interview took place, when known.
    pub fecha: Option<NaiveDate>,
    pub created_by_uid: Option<DbId>,
    pub deleted_by_uid: Option<DbId>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an entrevista. New rows default to `borrador`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntrevista {
    #[validate(length(min = 3, message = "titulo debe tener al menos 3 caracteres"))]
    pub titulo: String,
    pub descripcion: Option<String>,
    pub tipo_contenido: Option<EntrevistaContenido>,
    pub estado: Option<EstadoPublicacion>,
    pub fecha: Option<NaiveDate>,
}

/// DTO for updating an entrevista. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEntrevista {
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
    pub tipo_contenido: Option<EntrevistaContenido>,
    pub estado: Option<EstadoPublicacion>,
    pub fecha: Option<NaiveDate>,
}
