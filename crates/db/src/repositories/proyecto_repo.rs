//! Repository for the `proyectos` table.

use sqlx::PgPool;
use tecnica_core::search::contains_pattern;
use tecnica_core::types::DbId;

use crate::models::proyecto::{CreateProyecto, Proyecto, UpdateProyecto};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, titulo, descripcion, status, archivo_principal_url, \
    created_by_uid, deleted_by_uid, deleted_at, created_at, updated_at";

/// Provides CRUD operations for proyectos.
pub struct ProyectoRepo;

impl ProyectoRepo {
    /// Insert a new proyecto, stamping the acting user as owner.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProyecto,
        actor_id: DbId,
    ) -> Result<Proyecto, sqlx::Error> {
        let query = format!(
            "INSERT INTO proyectos
                (titulo, descripcion, status, archivo_principal_url, created_by_uid)
             VALUES ($1, $2, COALESCE($3, 'draft'::proyecto_status), $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Proyecto>(&query)
            .bind(&input.titulo)
            .bind(&input.descripcion)
            .bind(input.status)
            .bind(&input.archivo_principal_url)
            .bind(actor_id)
            .fetch_one(pool)
            .await
    }

    /// Find a proyecto by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Proyecto>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM proyectos WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Proyecto>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List proyectos ordered by titulo.
    ///
    /// Soft-deleted rows are included only when `include_deleted` is true.
    pub async fn list(pool: &PgPool, include_deleted: bool) -> Result<Vec<Proyecto>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM proyectos
             WHERE ($1 OR deleted_at IS NULL)
             ORDER BY titulo"
        );
        sqlx::query_as::<_, Proyecto>(&query)
            .bind(include_deleted)
            .fetch_all(pool)
            .await
    }

    /// List published proyectos for public browsing, ordered by titulo.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<Proyecto>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM proyectos
             WHERE deleted_at IS NULL AND status = 'published'::proyecto_status
             ORDER BY titulo"
        );
        sqlx::query_as::<_, Proyecto>(&query).fetch_all(pool).await
    }

    /// List all live proyectos owned by a user, newest first.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<Proyecto>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM proyectos
             WHERE created_by_uid = $1 AND deleted_at IS NULL
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Proyecto>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Update a proyecto. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProyecto,
    ) -> Result<Option<Proyecto>, sqlx::Error> {
        let query = format!(
            "UPDATE proyectos SET
                titulo = COALESCE($2, titulo),
                descripcion = COALESCE($3, descripcion),
                status = COALESCE($4, status),
                archivo_principal_url = COALESCE($5, archivo_principal_url),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Proyecto>(&query)
            .bind(id)
            .bind(&input.titulo)
            .bind(&input.descripcion)
            .bind(input.status)
            .bind(&input.archivo_principal_url)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a proyecto, stamping the acting user.
    /// Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId, actor_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE proyectos SET deleted_at = NOW(), deleted_by_uid = $2
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(actor_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore a soft-deleted proyecto. Returns `true` if a row was restored.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE proyectos SET deleted_at = NULL, deleted_by_uid = NULL
             WHERE id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring search over titulo and descripcion.
    /// Only published, non-deleted rows are searched.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Proyecto>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM proyectos
             WHERE deleted_at IS NULL
               AND status = 'published'::proyecto_status
               AND (titulo ILIKE $1 OR descripcion ILIKE $1)
             ORDER BY titulo"
        );
        sqlx::query_as::<_, Proyecto>(&query)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Permanently delete a proyecto by ID. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM proyectos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
