#![allow(dead_code)]

//! Shared helpers for repository integration tests.

use sqlx::PgPool;
use tecnica_core::types::DbId;
use tecnica_db::models::entrevista::CreateEntrevista;
use tecnica_db::models::noticia::CreateNoticia;
use tecnica_db::models::organizacion::CreateOrganizacion;
use tecnica_db::models::tema::CreateTema;
use tecnica_db::models::usuario::CreateUsuario;
use tecnica_db::repositories::UsuarioRepo;

/// Insert an authentication identity to act as the stamping actor.
///
/// Audit columns reference `usuarios(id)`, so every test that creates
/// entities needs at least one identity.
pub async fn seed_usuario(pool: &PgPool, email: &str) -> DbId {
    let usuario = UsuarioRepo::create(
        pool,
        &CreateUsuario {
            email: email.to_string(),
            // Not a real hash; these tests never verify passwords.
            password_hash: "$argon2id$test".to_string(),
        },
    )
    .await
    .expect("seeding usuario should succeed");
    usuario.id
}

pub fn new_tema(nombre: &str) -> CreateTema {
    CreateTema {
        nombre: nombre.to_string(),
        descripcion: Some("tema de prueba".to_string()),
        categoria_tema: None,
    }
}

pub fn new_noticia(titulo: &str) -> CreateNoticia {
    CreateNoticia {
        titulo: titulo.to_string(),
        tipo: None,
        contenido: Some("cuerpo de la nota".to_string()),
        enlace_url: None,
        imagen_url: None,
        estado: None,
    }
}

pub fn new_organizacion(nombre_oficial: &str) -> CreateOrganizacion {
    CreateOrganizacion {
        nombre_oficial: nombre_oficial.to_string(),
        nombre_fantasia: None,
        tipo: Some("empresa".to_string()),
        logo_url: None,
        areas_de_interes: vec!["electronica".to_string()],
    }
}

pub fn new_entrevista(titulo: &str) -> CreateEntrevista {
    CreateEntrevista {
        titulo: titulo.to_string(),
        descripcion: None,
        tipo_contenido: None,
        estado: None,
        fecha: None,
    }
}
