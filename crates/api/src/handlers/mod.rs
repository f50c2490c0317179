//! HTTP handlers, one module per resource.

pub mod auth;
pub mod entrevistas;
pub mod noticias;
pub mod og;
pub mod organizaciones;
pub mod personas;
pub mod proyectos;
pub mod registro;
pub mod temas;
pub mod trash;
