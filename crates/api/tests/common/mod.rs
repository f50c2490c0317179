#![allow(dead_code)]

//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the full router (same middleware stack as production) via
//! `tower::ServiceExt::oneshot`, without a TCP listener.

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tecnica_api::auth::jwt::{generate_access_token, JwtConfig};
use tecnica_api::auth::password::hash_password;
use tecnica_api::config::ServerConfig;
use tecnica_api::handlers::auth::role_for;
use tecnica_api::router::build_app_router;
use tecnica_api::state::AppState;
use tecnica_core::types::DbId;
use tecnica_db::models::persona::{CreatePersona, UpdatePersona};
use tecnica_db::models::usuario::CreateUsuario;
use tecnica_db::repositories::{PersonaRepo, UsuarioRepo};
use tower::ServiceExt;

/// Password used for every seeded account.
pub const TEST_PASSWORD: &str = "secreto-de-prueba";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        og_fetch_timeout_secs: 10,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Account seeding
// ---------------------------------------------------------------------------

/// A seeded account with a ready-to-use bearer token.
pub struct TestAccount {
    pub usuario_id: DbId,
    pub persona_id: DbId,
    pub token: String,
}

/// Create an identity + persona pair and return a signed access token.
pub async fn seed_account(pool: &PgPool, email: &str, es_admin: bool) -> TestAccount {
    let usuario = UsuarioRepo::create(
        pool,
        &CreateUsuario {
            email: email.to_string(),
            password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        },
    )
    .await
    .expect("seeding usuario should succeed");

    let persona = PersonaRepo::create(
        pool,
        usuario.id,
        &CreatePersona {
            nombre: "Prueba".to_string(),
            apellido: "Integracion".to_string(),
            email: email.to_string(),
            categoria_principal: None,
            bio: None,
            visibilidad_perfil: None,
            capacidades_plataforma: vec![],
        },
        usuario.id,
    )
    .await
    .expect("seeding persona should succeed");

    let persona = if es_admin {
        PersonaRepo::update(
            pool,
            persona.id,
            &UpdatePersona {
                es_admin: Some(true),
                ..Default::default()
            },
        )
        .await
        .expect("promoting persona should succeed")
        .expect("persona should exist")
    } else {
        persona
    };

    let token = generate_access_token(usuario.id, role_for(&persona), &test_config().jwt)
        .expect("token generation should succeed");

    TestAccount {
        usuario_id: usuario.id,
        persona_id: persona.id,
        token,
    }
}

pub async fn seed_admin(pool: &PgPool) -> TestAccount {
    seed_account(pool, "admin@tecnica.test", true).await
}

pub async fn seed_member(pool: &PgPool, email: &str) -> TestAccount {
    seed_account(pool, email, false).await
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request should build"),
        None => builder.body(Body::empty()).expect("request should build"),
    };
    app.oneshot(request).await.expect("request should not fail")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, token: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_json_auth(app: Router, uri: &str, token: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, None, Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
