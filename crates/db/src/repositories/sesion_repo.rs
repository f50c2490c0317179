//! Repository for the `sesiones` table (refresh-token sessions).

use sqlx::PgPool;
use tecnica_core::types::DbId;

use crate::models::sesion::{CreateSesion, Sesion};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, usuario_id, refresh_token_hash, expires_at, revocada, \
    user_agent, ip_address, created_at, updated_at";

/// Provides CRUD operations for sessions.
pub struct SesionRepo;

impl SesionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSesion) -> Result<Sesion, sqlx::Error> {
        let query = format!(
            "INSERT INTO sesiones (usuario_id, refresh_token_hash, expires_at, user_agent, ip_address)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sesion>(&query)
            .bind(input.usuario_id)
            .bind(&input.refresh_token_hash)
            .bind(input.expires_at)
            .bind(&input.user_agent)
            .bind(&input.ip_address)
            .fetch_one(pool)
            .await
    }

    /// Find an active session by its refresh token hash.
    ///
    /// Only returns sessions that are not revoked and not expired.
    pub async fn find_by_refresh_token_hash(
        pool: &PgPool,
        hash: &str,
    ) -> Result<Option<Sesion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sesiones
             WHERE refresh_token_hash = $1
               AND revocada = false
               AND expires_at > NOW()"
        );
        sqlx::query_as::<_, Sesion>(&query)
            .bind(hash)
            .fetch_optional(pool)
            .await
    }

    /// Revoke a single session. Returns `true` if the row was updated.
    pub async fn revoke(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE sesiones SET revocada = true WHERE id = $1 AND revocada = false")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Revoke all active sessions for a user. Returns the revoked count.
    pub async fn revoke_all_for_user(pool: &PgPool, usuario_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE sesiones SET revocada = true
             WHERE usuario_id = $1 AND revocada = false",
        )
        .bind(usuario_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete expired or revoked sessions. Returns the deleted count.
    pub async fn cleanup_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM sesiones WHERE expires_at < NOW() OR revocada = true")
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }
}
