//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication. Parameter names are camelCase to
//! match the JSON shape of the rest of the API.

use serde::Deserialize;
use tecnica_db::models::estado::EstadoVerificacion;

/// Query parameters for search endpoints (`?q=`).
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Values are clamped with `tecnica_core::search::clamp_limit` /
/// `clamp_offset` before reaching the repository layer.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for privileged list endpoints (`?includeDeleted=`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludeDeletedParams {
    #[serde(default)]
    pub include_deleted: bool,
}

/// Query parameters for organizacion lists (`?estadoVerificacion=`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificacionParams {
    pub estado_verificacion: Option<EstadoVerificacion>,
}
