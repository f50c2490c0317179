//! Repository for the `personas` table.

use sqlx::PgPool;
use tecnica_core::search::contains_pattern;
use tecnica_core::types::DbId;

use crate::models::persona::{CreatePersona, Persona, UpdatePersona};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, usuario_id, nombre, apellido, email, categoria_principal, bio, \
    activo, visibilidad_perfil, capacidades_plataforma, es_admin, estado_verificacion, \
    created_by_uid, deleted_by_uid, deleted_at, created_at, updated_at";

/// Provides CRUD operations for personas.
pub struct PersonaRepo;

impl PersonaRepo {
    /// Insert a new persona profile, returning the created row.
    ///
    /// Generic over the executor so registration can run this inside the
    /// same transaction that creates the authentication identity.
    pub async fn create<'e, E>(
        executor: E,
        usuario_id: DbId,
        input: &CreatePersona,
        actor_id: DbId,
    ) -> Result<Persona, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO personas
                (usuario_id, nombre, apellido, email, categoria_principal, bio,
                 visibilidad_perfil, capacidades_plataforma, created_by_uid)
             VALUES ($1, $2, $3, $4,
                     COALESCE($5, 'comunidad'::categoria_persona), $6,
                     COALESCE($7, 'comunidad'::visibilidad_perfil), $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Persona>(&query)
            .bind(usuario_id)
            .bind(&input.nombre)
            .bind(&input.apellido)
            .bind(&input.email)
            .bind(input.categoria_principal)
            .bind(&input.bio)
            .bind(input.visibilidad_perfil)
            .bind(&input.capacidades_plataforma)
            .bind(actor_id)
            .fetch_one(executor)
            .await
    }

    /// Find a persona by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Persona>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM personas WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Persona>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the persona belonging to an authentication identity.
    pub async fn find_by_usuario_id(
        pool: &PgPool,
        usuario_id: DbId,
    ) -> Result<Option<Persona>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM personas WHERE usuario_id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Persona>(&query)
            .bind(usuario_id)
            .fetch_optional(pool)
            .await
    }

    /// List personas ordered by apellido, nombre.
    ///
    /// Soft-deleted rows are included only when `include_deleted` is true
    /// (privileged callers).
    pub async fn list(pool: &PgPool, include_deleted: bool) -> Result<Vec<Persona>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM personas
             WHERE ($1 OR deleted_at IS NULL)
             ORDER BY apellido, nombre"
        );
        sqlx::query_as::<_, Persona>(&query)
            .bind(include_deleted)
            .fetch_all(pool)
            .await
    }

    /// List profiles visible in the public directory: active, public
    /// visibility, not deleted.
    pub async fn list_publicas(pool: &PgPool) -> Result<Vec<Persona>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM personas
             WHERE deleted_at IS NULL
               AND activo
               AND visibilidad_perfil = 'publico'::visibilidad_perfil
             ORDER BY apellido, nombre"
        );
        sqlx::query_as::<_, Persona>(&query).fetch_all(pool).await
    }

    /// Update a persona. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePersona,
    ) -> Result<Option<Persona>, sqlx::Error> {
        let query = format!(
            "UPDATE personas SET
                nombre = COALESCE($2, nombre),
                apellido = COALESCE($3, apellido),
                email = COALESCE($4, email),
                categoria_principal = COALESCE($5, categoria_principal),
                bio = COALESCE($6, bio),
                visibilidad_perfil = COALESCE($7, visibilidad_perfil),
                capacidades_plataforma = COALESCE($8, capacidades_plataforma),
                activo = COALESCE($9, activo),
                es_admin = COALESCE($10, es_admin),
                estado_verificacion = COALESCE($11, estado_verificacion),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Persona>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(&input.apellido)
            .bind(&input.email)
            .bind(input.categoria_principal)
            .bind(&input.bio)
            .bind(input.visibilidad_perfil)
            .bind(&input.capacidades_plataforma)
            .bind(input.activo)
            .bind(input.es_admin)
            .bind(input.estado_verificacion)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a persona, stamping the acting user.
    /// Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId, actor_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE personas SET deleted_at = NOW(), deleted_by_uid = $2
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(actor_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore a soft-deleted persona. Returns `true` if a row was restored.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE personas SET deleted_at = NULL, deleted_by_uid = NULL
             WHERE id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring search over nombre, apellido, and email.
    /// Only active, non-deleted profiles are searched.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Persona>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM personas
             WHERE deleted_at IS NULL
               AND activo
               AND (nombre ILIKE $1 OR apellido ILIKE $1 OR email ILIKE $1)
             ORDER BY apellido, nombre"
        );
        sqlx::query_as::<_, Persona>(&query)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Permanently delete a persona by ID. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM personas WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
