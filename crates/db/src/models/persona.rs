//! Persona (community member profile) model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tecnica_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::models::estado::EstadoVerificacion;

/// Main membership category of a persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "categoria_persona", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CategoriaPersona {
    Estudiante,
    Egresado,
    Docente,
    NoDocente,
    Comunidad,
}

/// Who can see a profile in the public directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "visibilidad_perfil", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VisibilidadPerfil {
    Publico,
    Comunidad,
    Privado,
}

/// A row from the `personas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    pub id: DbId,
    pub usuario_id: DbId,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub categoria_principal: CategoriaPersona,
    pub bio: Option<String>,
    pub activo: bool,
    pub visibilidad_perfil: VisibilidadPerfil,
    pub capacidades_plataforma: Vec<String>,
    pub es_admin: bool,
    pub estado_verificacion: EstadoVerificacion,
    pub created_by_uid: Option<DbId>,
    pub deleted_by_uid: Option<DbId>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a persona profile (used by registration).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersona {
    #[validate(length(min = 1, message = "nombre es obligatorio"))]
    pub nombre: String,
    #[validate(length(min = 1, message = "apellido es obligatorio"))]
    pub apellido: String,
    #[validate(email(message = "email invalido"))]
    pub email: String,
    pub categoria_principal: Option<CategoriaPersona>,
    pub bio: Option<String>,
    pub visibilidad_perfil: Option<VisibilidadPerfil>,
    #[serde(default)]
    pub capacidades_plataforma: Vec<String>,
}

/// DTO for updating a persona. Only non-`None` fields are applied.
///
/// `activo`, `es_admin`, and `estado_verificacion` are admin-managed;
/// handlers clear them for non-admin callers before this DTO reaches the
/// repository.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePersona {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub email: Option<String>,
    pub categoria_principal: Option<CategoriaPersona>,
    pub bio: Option<String>,
    pub visibilidad_perfil: Option<VisibilidadPerfil>,
    pub capacidades_plataforma: Option<Vec<String>>,
    pub activo: Option<bool>,
    pub es_admin: Option<bool>,
    pub estado_verificacion: Option<EstadoVerificacion>,
}
