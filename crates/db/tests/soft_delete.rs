//! Integration tests for soft-delete, restore, and hard-delete behaviour.
//!
//! Exercises the repository layer against a real database to verify that:
//! - Soft-deleted entities are hidden from `find_by_id` and default lists
//! - `list(include_deleted = true)` still surfaces them
//! - Restoring a soft-deleted entity makes it visible again
//! - Soft-delete stamps the acting user and is idempotent
//! - The cross-table trash view aggregates every entity type

mod common;

use common::{new_entrevista, new_noticia, new_tema, seed_usuario};
use sqlx::PgPool;
use tecnica_db::repositories::{EntrevistaRepo, NoticiaRepo, TemaRepo, TrashRepo};

#[sqlx::test(migrations = "./migrations")]
async fn test_soft_delete_restore_cycle(pool: PgPool) {
    let actor = seed_usuario(&pool, "admin@tecnica.test").await;
    let tema = TemaRepo::create(&pool, &new_tema("Electronica"), actor)
        .await
        .unwrap();

    let deleted = TemaRepo::soft_delete(&pool, tema.id, actor).await.unwrap();
    assert!(deleted, "soft_delete should return true on first call");

    // Hidden from the default list and from find_by_id.
    let visibles = TemaRepo::list(&pool, false).await.unwrap();
    assert!(
        !visibles.iter().any(|t| t.id == tema.id),
        "soft-deleted tema must not appear in the default list"
    );
    assert!(TemaRepo::find_by_id(&pool, tema.id).await.unwrap().is_none());

    // Still visible to privileged listing, with delete metadata stamped.
    let todas = TemaRepo::list(&pool, true).await.unwrap();
    let trashed = todas
        .iter()
        .find(|t| t.id == tema.id)
        .expect("include_deleted list must contain the soft-deleted tema");
    assert_eq!(trashed.deleted_by_uid, Some(actor));
    assert!(trashed.deleted_at.is_some());

    // Restore brings it back.
    let restored = TemaRepo::restore(&pool, tema.id).await.unwrap();
    assert!(restored, "restore should return true for a trashed row");

    let visibles = TemaRepo::list(&pool, false).await.unwrap();
    assert!(
        visibles.iter().any(|t| t.id == tema.id),
        "restored tema must appear in the default list again"
    );
    let row = TemaRepo::find_by_id(&pool, tema.id).await.unwrap().unwrap();
    assert!(row.deleted_at.is_none());
    assert!(row.deleted_by_uid.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_soft_delete_is_idempotent(pool: PgPool) {
    let actor = seed_usuario(&pool, "admin@tecnica.test").await;
    let noticia = NoticiaRepo::create(&pool, &new_noticia("Borrable"), actor)
        .await
        .unwrap();

    assert!(NoticiaRepo::soft_delete(&pool, noticia.id, actor)
        .await
        .unwrap());
    assert!(
        !NoticiaRepo::soft_delete(&pool, noticia.id, actor)
            .await
            .unwrap(),
        "second soft_delete must affect no rows"
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_restore_of_live_row_returns_false(pool: PgPool) {
    let actor = seed_usuario(&pool, "admin@tecnica.test").await;
    let tema = TemaRepo::create(&pool, &new_tema("Vivo"), actor)
        .await
        .unwrap();

    assert!(
        !TemaRepo::restore(&pool, tema.id).await.unwrap(),
        "restoring a live row must affect nothing"
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_hard_delete_removes_row(pool: PgPool) {
    let actor = seed_usuario(&pool, "admin@tecnica.test").await;
    let tema = TemaRepo::create(&pool, &new_tema("Definitivo"), actor)
        .await
        .unwrap();

    assert!(TemaRepo::hard_delete(&pool, tema.id).await.unwrap());
    let todas = TemaRepo::list(&pool, true).await.unwrap();
    assert!(!todas.iter().any(|t| t.id == tema.id));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_trash_aggregates_across_entity_types(pool: PgPool) {
    let actor = seed_usuario(&pool, "admin@tecnica.test").await;

    let tema = TemaRepo::create(&pool, &new_tema("Tema borrado"), actor)
        .await
        .unwrap();
    let noticia = NoticiaRepo::create(&pool, &new_noticia("Nota borrada"), actor)
        .await
        .unwrap();
    let entrevista = EntrevistaRepo::create(&pool, &new_entrevista("Charla borrada"), actor)
        .await
        .unwrap();

    TemaRepo::soft_delete(&pool, tema.id, actor).await.unwrap();
    NoticiaRepo::soft_delete(&pool, noticia.id, actor)
        .await
        .unwrap();
    EntrevistaRepo::soft_delete(&pool, entrevista.id, actor)
        .await
        .unwrap();

    let summary = TrashRepo::list_trashed(&pool, None).await.unwrap();
    assert_eq!(summary.total_count, 3);
    let types: Vec<_> = summary
        .items
        .iter()
        .map(|i| i.entity_type.as_str())
        .collect();
    assert!(types.contains(&"temas"));
    assert!(types.contains(&"noticias"));
    assert!(types.contains(&"entrevistas"));

    // Filtered view only sees one table.
    let solo_temas = TrashRepo::list_trashed(&pool, Some("temas")).await.unwrap();
    assert_eq!(solo_temas.total_count, 1);
    assert_eq!(solo_temas.items[0].name_or_label.as_deref(), Some("Tema borrado"));

    // Purge preview counts per type; purge_one removes exactly one.
    let preview = TrashRepo::purge_preview(&pool).await.unwrap();
    assert_eq!(preview.total_count, 3);

    assert!(TrashRepo::purge_one(&pool, "temas", tema.id).await.unwrap());
    assert!(
        !TrashRepo::purge_one(&pool, "temas", tema.id).await.unwrap(),
        "second purge of the same row must find nothing"
    );

    let remaining = TrashRepo::purge_all(&pool).await.unwrap();
    assert_eq!(remaining, 2);
    let after = TrashRepo::list_trashed(&pool, None).await.unwrap();
    assert_eq!(after.total_count, 0);
}
