//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Rows are stored snake_case; everything serializes camelCase so the
//! application-facing JSON shape matches what the frontend expects.

pub mod entrevista;
pub mod estado;
pub mod noticia;
pub mod organizacion;
pub mod persona;
pub mod proyecto;
pub mod sesion;
pub mod tema;
pub mod usuario;
