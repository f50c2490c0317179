//! HTTP-level integration tests for the entity CRUD endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get, post_auth, post_json_auth, put_json, put_json_auth, seed_admin,
    seed_member,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Tema lifecycle: create -> get -> soft delete -> restore
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_tema_lifecycle(pool: PgPool) {
    let admin = seed_admin(&pool).await;

    // Create.
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/temas",
        &admin.token,
        serde_json::json!({"nombre": "Electronica", "descripcion": "Taller de electronica"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["nombre"], "Electronica");

    // Read back: same fields, server-stamped audit metadata present.
    let response = get(common::build_test_app(pool.clone()), &format!("/api/temas/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["data"]["nombre"], "Electronica");
    assert_eq!(fetched["data"]["descripcion"], "Taller de electronica");
    assert!(fetched["data"]["createdAt"].is_string());

    // Soft delete.
    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/temas/{id}"),
        &admin.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Gone from the public list...
    let response = get(common::build_test_app(pool.clone()), "/api/temas").await;
    let listed = body_json(response).await;
    assert!(
        !listed["data"]
            .as_array()
            .unwrap()
            .iter()
            .any(|t| t["id"].as_i64() == Some(id)),
        "soft-deleted tema must not appear in the public list"
    );

    // ...but still visible to the privileged admin list.
    let response = get_admin_list(&pool, &admin.token, true).await;
    let listed = body_json(response).await;
    assert!(listed["data"]
        .as_array()
        .unwrap()
        .iter()
        .any(|t| t["id"].as_i64() == Some(id)));

    // Restore.
    let response = post_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/temas/{id}/restore"),
        &admin.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Back in the public list.
    let response = get(common::build_test_app(pool.clone()), "/api/temas").await;
    let listed = body_json(response).await;
    assert!(listed["data"]
        .as_array()
        .unwrap()
        .iter()
        .any(|t| t["id"].as_i64() == Some(id)));
}

async fn get_admin_list(
    pool: &PgPool,
    token: &str,
    include_deleted: bool,
) -> axum::http::Response<axum::body::Body> {
    common::get_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/admin/temas?includeDeleted={include_deleted}"),
        token,
    )
    .await
}

// ---------------------------------------------------------------------------
// Error envelope
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_tema_returns_404_envelope(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/temas/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(json["error"].as_str().unwrap().contains("999999"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_nonexistent_returns_404_not_a_panic(pool: PgPool) {
    let admin = seed_admin(&pool).await;
    let response = put_json_auth(
        common::build_test_app(pool),
        "/api/temas/999999",
        &admin.token,
        serde_json::json!({"nombre": "No existe"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_tema_validation_error_with_details(pool: PgPool) {
    let admin = seed_admin(&pool).await;
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/temas",
        &admin.token,
        serde_json::json!({"nombre": "x"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(
        json["details"]["nombre"].is_array(),
        "per-field details should name the offending field"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_tema_nombre_conflicts(pool: PgPool) {
    let admin = seed_admin(&pool).await;
    let body = serde_json::json!({"nombre": "Unico"});
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/temas",
        &admin.token,
        body.clone(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response =
        post_json_auth(common::build_test_app(pool), "/api/temas", &admin.token, body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// Noticias: drafts, ownership, dashboards
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_noticia_draft_flow_and_owner_dashboard(pool: PgPool) {
    let member = seed_member(&pool, "redactora@tecnica.test").await;

    // Create (defaults to borrador).
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/noticias",
        &member.token,
        serde_json::json!({"titulo": "Se viene el aniversario", "contenido": "Programa del acto"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["estado"], "borrador");

    // Drafts are not in the public feed.
    let response = get(common::build_test_app(pool.clone()), "/api/noticias").await;
    let feed = body_json(response).await;
    assert!(feed["data"].as_array().unwrap().is_empty());

    // The owner dashboard shows the draft.
    let response = common::get_auth(
        common::build_test_app(pool.clone()),
        "/api/user/noticias",
        &member.token,
    )
    .await;
    let mine = body_json(response).await;
    assert_eq!(mine["data"].as_array().unwrap().len(), 1);

    // Publishing makes it public.
    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/noticias/{id}"),
        &member.token,
        serde_json::json!({"estado": "publicada"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(common::build_test_app(pool), "/api/noticias").await;
    let feed = body_json(response).await;
    assert_eq!(feed["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_requires_ownership(pool: PgPool) {
    let owner = seed_member(&pool, "duenia@tecnica.test").await;
    let intruder = seed_member(&pool, "intrusa@tecnica.test").await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/noticias",
        &owner.token,
        serde_json::json!({"titulo": "Nota propia"}),
    )
    .await;
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();

    // A different member cannot edit it.
    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/noticias/{id}"),
        &intruder.token,
        serde_json::json!({"titulo": "Tomada"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Anonymous editing is unauthorized.
    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/noticias/{id}"),
        serde_json::json!({"titulo": "Anonima"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // An admin can.
    let admin = seed_admin(&pool).await;
    let response = put_json_auth(
        common::build_test_app(pool),
        &format!("/api/noticias/{id}"),
        &admin.token,
        serde_json::json!({"titulo": "Corregida por moderacion"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_requires_auth(pool: PgPool) {
    let response = common::post_json(
        common::build_test_app(pool),
        "/api/noticias",
        serde_json::json!({"titulo": "Sin sesion"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

// ---------------------------------------------------------------------------
// Topic links over HTTP
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_noticia_topic_links(pool: PgPool) {
    let admin = seed_admin(&pool).await;

    let tema = body_json(
        post_json_auth(
            common::build_test_app(pool.clone()),
            "/api/temas",
            &admin.token,
            serde_json::json!({"nombre": "Memoria"}),
        )
        .await,
    )
    .await;
    let tema_id = tema["data"]["id"].as_i64().unwrap();

    let noticia = body_json(
        post_json_auth(
            common::build_test_app(pool.clone()),
            "/api/noticias",
            &admin.token,
            serde_json::json!({"titulo": "Nota con tema"}),
        )
        .await,
    )
    .await;
    let noticia_id = noticia["data"]["id"].as_i64().unwrap();

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/noticias/{noticia_id}/temas"),
        &admin.token,
        serde_json::json!({"temaIds": [tema_id]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let links = body_json(response).await;
    assert_eq!(links["data"][0]["nombre"], "Memoria");

    // Public read of the links.
    let response = get(
        common::build_test_app(pool),
        &format!("/api/noticias/{noticia_id}/temas"),
    )
    .await;
    let links = body_json(response).await;
    assert_eq!(links["data"].as_array().unwrap().len(), 1);
}
