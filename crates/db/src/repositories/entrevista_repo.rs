//! Repository for the `entrevistas` table.

use sqlx::PgPool;
use tecnica_core::search::contains_pattern;
use tecnica_core::types::DbId;

use crate::models::entrevista::{CreateEntrevista, Entrevista, UpdateEntrevista};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, titulo, descripcion, tipo_contenido, estado, fecha, \
    created_by_uid, deleted_by_uid, deleted_at, created_at, updated_at";

/// Provides CRUD operations for entrevistas.
pub struct EntrevistaRepo;

impl EntrevistaRepo {
    /// Insert a new entrevista, stamping the acting user as owner.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEntrevista,
        actor_id: DbId,
    ) -> Result<Entrevista, sqlx::Error> {
        let query = format!(
            "INSERT INTO entrevistas
                (titulo, descripcion, tipo_contenido, estado, fecha, created_by_uid)
             VALUES ($1, $2, COALESCE($3, 'video'::entrevista_contenido),
                     COALESCE($4, 'borrador'::estado_publicacion), $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Entrevista>(&query)
            .bind(&input.titulo)
            .bind(&input.descripcion)
            .bind(input.tipo_contenido)
            .bind(input.estado)
            .bind(input.fecha)
            .bind(actor_id)
            .fetch_one(pool)
            .await
    }

    /// Find an entrevista by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Entrevista>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM entrevistas WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Entrevista>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List entrevistas, most recent interview date first (undated last).
    ///
    /// Soft-deleted rows are included only when `include_deleted` is true.
    pub async fn list(
        pool: &PgPool,
        include_deleted: bool,
    ) -> Result<Vec<Entrevista>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM entrevistas
             WHERE ($1 OR deleted_at IS NULL)
             ORDER BY fecha DESC NULLS LAST, titulo"
        );
        sqlx::query_as::<_, Entrevista>(&query)
            .bind(include_deleted)
            .fetch_all(pool)
            .await
    }

    /// List published entrevistas for public browsing.
    pub async fn list_publicadas(pool: &PgPool) -> Result<Vec<Entrevista>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM entrevistas
             WHERE deleted_at IS NULL AND estado = 'publicada'::estado_publicacion
             ORDER BY fecha DESC NULLS LAST, titulo"
        );
        sqlx::query_as::<_, Entrevista>(&query).fetch_all(pool).await
    }

    /// List all live entrevistas owned by a user, newest first.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<Entrevista>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM entrevistas
             WHERE created_by_uid = $1 AND deleted_at IS NULL
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Entrevista>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Update an entrevista. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEntrevista,
    ) -> Result<Option<Entrevista>, sqlx::Error> {
        let query = format!(
            "UPDATE entrevistas SET
                titulo = COALESCE($2, titulo),
                descripcion = COALESCE($3, descripcion),
                tipo_contenido = COALESCE($4, tipo_contenido),
                estado = COALESCE($5, estado),
                fecha = COALESCE($6, fecha),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Entrevista>(&query)
            .bind(id)
            .bind(&input.titulo)
            .bind(&input.descripcion)
            .bind(input.tipo_contenido)
            .bind(input.estado)
            .bind(input.fecha)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an entrevista, stamping the acting user.
    /// Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId, actor_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE entrevistas SET deleted_at = NOW(), deleted_by_uid = $2
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(actor_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore a soft-deleted entrevista. Returns `true` if a row was restored.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE entrevistas SET deleted_at = NULL, deleted_by_uid = NULL
             WHERE id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring search over titulo and descripcion.
    /// Only published, non-deleted rows are searched.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Entrevista>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM entrevistas
             WHERE deleted_at IS NULL
               AND estado = 'publicada'::estado_publicacion
               AND (titulo ILIKE $1 OR descripcion ILIKE $1)
             ORDER BY fecha DESC NULLS LAST, titulo"
        );
        sqlx::query_as::<_, Entrevista>(&query)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Permanently delete an entrevista by ID. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM entrevistas WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
