//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. The two repositories used
//! by registration (`UsuarioRepo::create`, `PersonaRepo::create`) accept
//! any `PgExecutor` so both inserts can share one transaction.

pub mod entrevista_repo;
pub mod noticia_repo;
pub mod organizacion_repo;
pub mod persona_repo;
pub mod proyecto_repo;
pub mod sesion_repo;
pub mod tema_repo;
pub mod tema_vinculo_repo;
pub mod trash_repo;
pub mod usuario_repo;

pub use entrevista_repo::EntrevistaRepo;
pub use noticia_repo::NoticiaRepo;
pub use organizacion_repo::OrganizacionRepo;
pub use persona_repo::PersonaRepo;
pub use proyecto_repo::ProyectoRepo;
pub use sesion_repo::SesionRepo;
pub use tema_repo::TemaRepo;
pub use tema_vinculo_repo::TemaVinculoRepo;
pub use trash_repo::TrashRepo;
pub use usuario_repo::UsuarioRepo;
