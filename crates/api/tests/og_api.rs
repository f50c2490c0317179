//! Integration tests for `GET /api/get-og-data` input validation.
//!
//! These paths reject before any outbound request, so no network access is
//! needed.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_url_is_400(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/get-og-data").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing url parameter");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_blank_url_is_400(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/get-og-data?url=%20%20").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing url parameter");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_url_is_400(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/get-og-data?url=not-a-url").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid URL format");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_http_scheme_is_400(pool: PgPool) {
    let response = get(
        common::build_test_app(pool),
        "/api/get-og-data?url=ftp%3A%2F%2Fexample.com%2Ffile",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid URL format");
}
