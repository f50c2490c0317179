//! Organizacion model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tecnica_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::models::estado::EstadoVerificacion;

/// A row from the `organizaciones` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organizacion {
    pub id: DbId,
    pub nombre_oficial: String,
    pub nombre_fantasia: Option<String>,
    /// Free-form kind: "empresa", "ong", "cooperativa", ...
    pub tipo: Option<String>,
    pub logo_url: Option<String>,
    pub areas_de_interes: Vec<String>,
    pub estado_verificacion: EstadoVerificacion,
    pub created_by_uid: Option<DbId>,
    pub deleted_by_uid: Option<DbId>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an organizacion. New rows start as `pendiente`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizacion {
    #[validate(length(min = 2, message = "nombreOficial debe tener al menos 2 caracteres"))]
    pub nombre_oficial: String,
    pub nombre_fantasia: Option<String>,
    pub tipo: Option<String>,
    #[validate(url(message = "logoUrl debe ser una URL valida"))]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub areas_de_interes: Vec<String>,
}

/// DTO for updating an organizacion. Only non-`None` fields are applied.
///
/// `estado_verificacion` is admin-managed; handlers clear it for non-admin
/// callers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganizacion {
    pub nombre_oficial: Option<String>,
    pub nombre_fantasia: Option<String>,
    pub tipo: Option<String>,
    pub logo_url: Option<String>,
    pub areas_de_interes: Option<Vec<String>>,
    pub estado_verificacion: Option<EstadoVerificacion>,
}
