//! Authentication identity model and DTOs.

use sqlx::FromRow;
use tecnica_core::types::{DbId, Timestamp};

/// Full row from the `usuarios` table.
///
/// Contains the password hash -- NEVER serialize this to API responses.
/// Profile data for API output lives in `personas`.
#[derive(Debug, Clone, FromRow)]
pub struct Usuario {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub activo: bool,
    pub intentos_fallidos: i32,
    pub bloqueado_hasta: Option<Timestamp>,
    pub ultimo_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new authentication identity.
pub struct CreateUsuario {
    pub email: String,
    pub password_hash: String,
}
