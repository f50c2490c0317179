//! Role-gating tests: admin-only surfaces must reject non-admins before
//! any data is produced, regardless of timing.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, seed_admin, seed_member};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_temas_rejects_anonymous(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/admin/temas").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert!(json.get("data").is_none(), "no data may leak on rejection");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_temas_rejects_members(pool: PgPool) {
    let member = seed_member(&pool, "socia@tecnica.test").await;
    let response = get_auth(
        common::build_test_app(pool),
        "/api/admin/temas",
        &member.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
    assert!(json.get("data").is_none(), "no data may leak on rejection");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_temas_allows_admin(pool: PgPool) {
    let admin = seed_admin(&pool).await;
    let response = get_auth(
        common::build_test_app(pool),
        "/api/admin/temas",
        &admin.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"].is_array());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_trash_is_admin_only(pool: PgPool) {
    let member = seed_member(&pool, "socia@tecnica.test").await;

    let response = get(common::build_test_app(pool.clone()), "/api/trash").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/trash",
        &member.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let admin = seed_admin(&pool).await;
    let response = get_auth(common::build_test_app(pool), "/api/trash", &admin.token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["totalCount"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_tema_mutations_are_admin_only(pool: PgPool) {
    let member = seed_member(&pool, "socia@tecnica.test").await;
    let response = common::post_json_auth(
        common::build_test_app(pool),
        "/api/temas",
        &member.token,
        serde_json::json!({"nombre": "No autorizado"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_token_is_unauthorized(pool: PgPool) {
    let response = get_auth(
        common::build_test_app(pool),
        "/api/user/noticias",
        "not-a-real-token",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
