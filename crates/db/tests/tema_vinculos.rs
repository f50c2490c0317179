//! Integration tests for polymorphic topic links.

mod common;

use common::{new_noticia, new_tema, seed_usuario};
use sqlx::PgPool;
use tecnica_db::repositories::tema_vinculo_repo::is_linkable_entity_type;
use tecnica_db::repositories::{NoticiaRepo, TemaRepo, TemaVinculoRepo};

#[sqlx::test(migrations = "./migrations")]
async fn test_set_and_list_links(pool: PgPool) {
    let actor = seed_usuario(&pool, "actor@tecnica.test").await;
    let noticia = NoticiaRepo::create(&pool, &new_noticia("Nota con temas"), actor)
        .await
        .unwrap();
    let electronica = TemaRepo::create(&pool, &new_tema("Electronica"), actor)
        .await
        .unwrap();
    let historia = TemaRepo::create(&pool, &new_tema("Historia"), actor)
        .await
        .unwrap();

    TemaVinculoRepo::set_for_entity(
        &pool,
        "noticias",
        noticia.id,
        &[electronica.id, historia.id],
        actor,
    )
    .await
    .unwrap();

    let temas = TemaVinculoRepo::list_for_entity(&pool, "noticias", noticia.id)
        .await
        .unwrap();
    let nombres: Vec<_> = temas.iter().map(|t| t.nombre.as_str()).collect();
    assert_eq!(nombres, vec!["Electronica", "Historia"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_set_replaces_previous_links(pool: PgPool) {
    let actor = seed_usuario(&pool, "actor@tecnica.test").await;
    let noticia = NoticiaRepo::create(&pool, &new_noticia("Nota"), actor)
        .await
        .unwrap();
    let a = TemaRepo::create(&pool, &new_tema("Tema A"), actor)
        .await
        .unwrap();
    let b = TemaRepo::create(&pool, &new_tema("Tema B"), actor)
        .await
        .unwrap();

    TemaVinculoRepo::set_for_entity(&pool, "noticias", noticia.id, &[a.id], actor)
        .await
        .unwrap();
    TemaVinculoRepo::set_for_entity(&pool, "noticias", noticia.id, &[b.id], actor)
        .await
        .unwrap();

    let temas = TemaVinculoRepo::list_for_entity(&pool, "noticias", noticia.id)
        .await
        .unwrap();
    assert_eq!(temas.len(), 1);
    assert_eq!(temas[0].nombre, "Tema B");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_reverse_lookup_by_tema(pool: PgPool) {
    let actor = seed_usuario(&pool, "actor@tecnica.test").await;
    let tema = TemaRepo::create(&pool, &new_tema("Compartido"), actor)
        .await
        .unwrap();
    let n1 = NoticiaRepo::create(&pool, &new_noticia("Primera"), actor)
        .await
        .unwrap();
    let n2 = NoticiaRepo::create(&pool, &new_noticia("Segunda"), actor)
        .await
        .unwrap();

    TemaVinculoRepo::set_for_entity(&pool, "noticias", n1.id, &[tema.id], actor)
        .await
        .unwrap();
    TemaVinculoRepo::set_for_entity(&pool, "noticias", n2.id, &[tema.id], actor)
        .await
        .unwrap();

    let ids = TemaVinculoRepo::list_entity_ids_for_tema(&pool, tema.id, "noticias")
        .await
        .unwrap();
    assert_eq!(ids, vec![n1.id, n2.id]);

    // Other entity types are unaffected.
    let personas = TemaVinculoRepo::list_entity_ids_for_tema(&pool, tema.id, "personas")
        .await
        .unwrap();
    assert!(personas.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_deleted_temas_drop_out_of_link_listings(pool: PgPool) {
    let actor = seed_usuario(&pool, "actor@tecnica.test").await;
    let noticia = NoticiaRepo::create(&pool, &new_noticia("Nota"), actor)
        .await
        .unwrap();
    let tema = TemaRepo::create(&pool, &new_tema("Efimero"), actor)
        .await
        .unwrap();

    TemaVinculoRepo::set_for_entity(&pool, "noticias", noticia.id, &[tema.id], actor)
        .await
        .unwrap();
    TemaRepo::soft_delete(&pool, tema.id, actor).await.unwrap();

    let temas = TemaVinculoRepo::list_for_entity(&pool, "noticias", noticia.id)
        .await
        .unwrap();
    assert!(
        temas.is_empty(),
        "links to soft-deleted temas must not be listed"
    );
}

#[test]
fn test_linkable_entity_types() {
    assert!(is_linkable_entity_type("noticias"));
    assert!(is_linkable_entity_type("personas"));
    assert!(is_linkable_entity_type("proyectos"));
    assert!(!is_linkable_entity_type("organizaciones"));
    assert!(!is_linkable_entity_type("usuarios"));
}
