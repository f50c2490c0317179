//! Repository for the `usuarios` table (authentication identities).

use sqlx::PgPool;
use tecnica_core::types::{DbId, Timestamp};

use crate::models::usuario::{CreateUsuario, Usuario};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password_hash, activo, intentos_fallidos, \
    bloqueado_hasta, ultimo_login_at, created_at, updated_at";

/// Provides operations on authentication identities.
pub struct UsuarioRepo;

impl UsuarioRepo {
    /// Insert a new identity, returning the created row.
    ///
    /// Generic over the executor so registration can run this inside the
    /// same transaction that creates the persona profile.
    pub async fn create<'e, E>(executor: E, input: &CreateUsuario) -> Result<Usuario, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO usuarios (email, password_hash)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Usuario>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(executor)
            .await
    }

    /// Find an identity by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Usuario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM usuarios WHERE id = $1");
        sqlx::query_as::<_, Usuario>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an identity by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Usuario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM usuarios WHERE email = $1");
        sqlx::query_as::<_, Usuario>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Increment the failed login counter by 1.
    pub async fn increment_failed_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE usuarios SET intentos_fallidos = intentos_fallidos + 1 WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Lock an account until the specified timestamp.
    pub async fn lock_account(
        pool: &PgPool,
        id: DbId,
        until: Timestamp,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE usuarios SET bloqueado_hasta = $2 WHERE id = $1")
            .bind(id)
            .bind(until)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Record a successful login: reset the failure counter, clear any lock,
    /// and stamp `ultimo_login_at`.
    pub async fn record_successful_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE usuarios SET
                intentos_fallidos = 0,
                bloqueado_hasta = NULL,
                ultimo_login_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }

}
