//! Noticia (news entry) model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tecnica_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::models::estado::EstadoPublicacion;

/// A news entry is either a full article or a link to an external page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "noticia_tipo", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NoticiaTipo {
    Article,
    Link,
}

/// A row from the `noticias` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Noticia {
    pub id: DbId,
    pub titulo: String,
    pub tipo: NoticiaTipo,
    /// Article body; `None` for link-type entries.
    pub contenido: Option<String>,
    /// External target; `None` for article-type entries.
    pub enlace_url: Option<String>,
    pub imagen_url: Option<String>,
    pub estado: EstadoPublicacion,
    pub created_by_uid: Option<DbId>,
    pub deleted_by_uid: Option<DbId>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a noticia. New entries default to `borrador`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoticia {
    #[validate(length(min = 3, message = "titulo debe tener al menos 3 caracteres"))]
    pub titulo: String,
    pub tipo: Option<NoticiaTipo>,
    pub contenido: Option<String>,
    #[validate(url(message = "enlaceUrl debe ser una URL valida"))]
    pub enlace_url: Option<String>,
    #[validate(url(message = "imagenUrl debe ser una URL valida"))]
    pub imagen_url: Option<String>,
    pub estado: Option<EstadoPublicacion>,
}

/// DTO for updating a noticia. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoticia {
    pub titulo: Option<String>,
    pub tipo: Option<NoticiaTipo>,
    pub contenido: Option<String>,
    pub enlace_url: Option<String>,
    pub imagen_url: Option<String>,
    pub estado: Option<EstadoPublicacion>,
}
