//! Handler for `POST /api/registro`: public self-registration.
//!
//! Creates the authentication identity and the persona profile in one
//! database transaction, so a profile-creation failure never leaves an
//! orphaned identity behind.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tecnica_core::error::CoreError;
use tecnica_db::models::persona::{CategoriaPersona, CreatePersona, Persona, VisibilidadPerfil};
use tecnica_db::models::usuario::CreateUsuario;
use tecnica_db::repositories::{PersonaRepo, UsuarioRepo};
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Minimum password length enforced on self-registration.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Request body for `POST /api/registro`.
///
/// Fields are `Option` so a missing field yields a 400 with a clear
/// message instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistroRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub user_data: Option<RegistroUserData>,
}

/// Profile fields supplied at registration.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistroUserData {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub categoria_principal: Option<CategoriaPersona>,
    pub bio: Option<String>,
    pub visibilidad_perfil: Option<VisibilidadPerfil>,
    #[serde(default)]
    pub capacidades_plataforma: Vec<String>,
}

/// POST /api/registro
///
/// Creates an authentication identity plus its persona profile atomically.
/// Returns 201 with the created persona.
pub async fn registro(
    State(state): State<AppState>,
    Json(input): Json<RegistroRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Persona>>)> {
    // 1. Presence checks: all three top-level fields are required.
    let (email, password, user_data) = match (input.email, input.password, input.user_data) {
        (Some(e), Some(p), Some(d)) => (e, p, d),
        _ => {
            return Err(AppError::BadRequest(
                "Missing required fields: email, password, userData".into(),
            ))
        }
    };
    let (nombre, apellido) = match (user_data.nombre, user_data.apellido) {
        (Some(n), Some(a)) => (n, a),
        _ => {
            return Err(AppError::BadRequest(
                "Missing required fields: userData.nombre, userData.apellido".into(),
            ))
        }
    };

    // 2. Schema validation of the profile before anything reaches storage.
    let create_persona = CreatePersona {
        nombre,
        apellido,
        email: email.clone(),
        categoria_principal: user_data.categoria_principal,
        bio: user_data.bio,
        visibilidad_perfil: user_data.visibilidad_perfil,
        capacidades_plataforma: user_data.capacidades_plataforma,
    };
    create_persona.validate()?;

    validate_password_strength(&password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    // 3. Duplicate check up front so the common case gets a 400 with a
    //    readable message. A concurrent insert still trips
    //    uq_usuarios_email and surfaces as 409.
    if UsuarioRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CoreError::Validation(
            "Ya existe una cuenta registrada con ese email".into(),
        )));
    }

    // 4. Hash the password.
    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    // 5. Identity + profile in one transaction: a profile failure rolls the
    //    identity back, so no orphaned accounts exist at any point.
    let mut tx = state.pool.begin().await?;

    let usuario = UsuarioRepo::create(
        &mut *tx,
        &CreateUsuario {
            email,
            password_hash,
        },
    )
    .await?;

    let persona = PersonaRepo::create(&mut *tx, usuario.id, &create_persona, usuario.id).await?;

    tx.commit().await?;

    tracing::info!(usuario_id = usuario.id, persona_id = persona.id, "registered new account");

    Ok((StatusCode::CREATED, Json(DataResponse { data: persona })))
}
