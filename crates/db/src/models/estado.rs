//! Enum types shared by more than one entity.
//!
//! These must match the PostgreSQL enum types created in
//! `20260301000001_create_enum_types.sql`.

use serde::{Deserialize, Serialize};

/// Publication state for noticias and entrevistas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "estado_publicacion", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EstadoPublicacion {
    Borrador,
    Publicada,
    Archivada,
}

/// Verification state for personas and organizaciones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "estado_verificacion", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EstadoVerificacion {
    Pendiente,
    Verificado,
    Rechazado,
}
