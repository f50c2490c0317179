//! Handlers for the `/auth` resource (login, refresh, logout).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tecnica_core::error::CoreError;
use tecnica_core::roles::{ROLE_ADMIN, ROLE_MIEMBRO};
use tecnica_core::types::DbId;
use tecnica_db::models::sesion::CreateSesion;
use tecnica_db::repositories::{PersonaRepo, SesionRepo, UsuarioRepo};

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Maximum consecutive failed login attempts before locking the account.
const MAX_FAILED_ATTEMPTS: i32 = 5;

/// Duration in minutes to lock an account after exceeding failed attempts.
const LOCK_DURATION_MINS: i64 = 15;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful authentication response returned by login and refresh.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: DbId,
    pub email: String,
    pub nombre: String,
    pub apellido: String,
    pub role: String,
    pub persona_id: DbId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Authenticate with email + password. Returns access and refresh tokens.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    // 1. Find the identity by email.
    let usuario = UsuarioRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    // 2. Check if the account is active.
    if !usuario.activo {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    // 3. Check if the account is temporarily locked.
    if let Some(bloqueado_hasta) = usuario.bloqueado_hasta {
        if bloqueado_hasta > Utc::now() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is temporarily locked. Try again later.".into(),
            )));
        }
    }

    // 4. Verify password.
    let password_valid = verify_password(&input.password, &usuario.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        // 5. On failure: increment counter, lock if threshold exceeded.
        UsuarioRepo::increment_failed_login(&state.pool, usuario.id).await?;

        let new_count = usuario.intentos_fallidos + 1;
        if new_count >= MAX_FAILED_ATTEMPTS {
            let lock_until = Utc::now() + chrono::Duration::minutes(LOCK_DURATION_MINS);
            UsuarioRepo::lock_account(&state.pool, usuario.id, lock_until).await?;
        }

        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    // 6. On success: reset failed count, stamp ultimo_login_at.
    UsuarioRepo::record_successful_login(&state.pool, usuario.id).await?;

    // 7. Resolve the role from the persona profile.
    let persona = PersonaRepo::find_by_usuario_id(&state.pool, usuario.id)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!("No persona profile for usuario {}", usuario.id))
        })?;

    // 8. Generate tokens and create a session.
    let response = create_auth_response(&state, &usuario.email, &persona).await?;

    Ok(Json(response))
}

/// POST /api/auth/refresh
///
/// Exchange a valid refresh token for new access + refresh tokens.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    // 1. Hash the provided refresh token.
    let token_hash = hash_refresh_token(&input.refresh_token);

    // 2. Find a matching active session.
    let sesion = SesionRepo::find_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    // 3. Revoke the old session (token rotation).
    SesionRepo::revoke(&state.pool, sesion.id).await?;

    // 4. Find the identity and its profile.
    let usuario = UsuarioRepo::find_by_id(&state.pool, sesion.usuario_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    if !usuario.activo {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let persona = PersonaRepo::find_by_usuario_id(&state.pool, usuario.id)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!("No persona profile for usuario {}", usuario.id))
        })?;

    // 5. Generate new tokens and create a new session.
    let response = create_auth_response(&state, &usuario.email, &persona).await?;

    Ok(Json(response))
}

/// POST /api/auth/logout
///
/// Revoke all sessions for the authenticated user. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<StatusCode> {
    SesionRepo::revoke_all_for_user(&state.pool, auth_user.usuario_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve the role name for a persona profile.
pub fn role_for(persona: &tecnica_db::models::persona::Persona) -> &'static str {
    if persona.es_admin {
        ROLE_ADMIN
    } else {
        ROLE_MIEMBRO
    }
}

/// Generate access + refresh tokens, persist a session row, and build the response.
async fn create_auth_response(
    state: &AppState,
    email: &str,
    persona: &tecnica_db::models::persona::Persona,
) -> AppResult<AuthResponse> {
    let role = role_for(persona);

    let access_token = generate_access_token(persona.usuario_id, role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();

    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    let sesion_input = CreateSesion {
        usuario_id: persona.usuario_id,
        refresh_token_hash: refresh_hash,
        expires_at,
        user_agent: None,
        ip_address: None,
    };
    SesionRepo::create(&state.pool, &sesion_input).await?;

    let expires_in = state.config.jwt.access_token_expiry_mins * 60;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in,
        user: UserInfo {
            id: persona.usuario_id,
            email: email.to_string(),
            nombre: persona.nombre.clone(),
            apellido: persona.apellido.clone(),
            role: role.to_string(),
            persona_id: persona.id,
        },
    })
}
