//! Repository for the `temas` table.

use sqlx::PgPool;
use tecnica_core::search::contains_pattern;
use tecnica_core::types::DbId;

use crate::models::tema::{CreateTema, Tema, UpdateTema};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nombre, descripcion, categoria_tema, \
    created_by_uid, deleted_by_uid, deleted_at, created_at, updated_at";

/// Provides CRUD operations for temas.
pub struct TemaRepo;

impl TemaRepo {
    /// Insert a new tema, stamping the acting user as owner.
    ///
    /// Tema names are unique (`uq_temas_nombre`); a duplicate surfaces as a
    /// unique-violation database error.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTema,
        actor_id: DbId,
    ) -> Result<Tema, sqlx::Error> {
        let query = format!(
            "INSERT INTO temas (nombre, descripcion, categoria_tema, created_by_uid)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tema>(&query)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(&input.categoria_tema)
            .bind(actor_id)
            .fetch_one(pool)
            .await
    }

    /// Find a tema by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tema>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM temas WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Tema>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List temas ordered by nombre.
    ///
    /// Soft-deleted rows are included only when `include_deleted` is true.
    pub async fn list(pool: &PgPool, include_deleted: bool) -> Result<Vec<Tema>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM temas
             WHERE ($1 OR deleted_at IS NULL)
             ORDER BY nombre"
        );
        sqlx::query_as::<_, Tema>(&query)
            .bind(include_deleted)
            .fetch_all(pool)
            .await
    }

    /// Update a tema. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTema,
    ) -> Result<Option<Tema>, sqlx::Error> {
        let query = format!(
            "UPDATE temas SET
                nombre = COALESCE($2, nombre),
                descripcion = COALESCE($3, descripcion),
                categoria_tema = COALESCE($4, categoria_tema),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tema>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(&input.categoria_tema)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a tema, stamping the acting user.
    /// Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId, actor_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE temas SET deleted_at = NOW(), deleted_by_uid = $2
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(actor_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore a soft-deleted tema. Returns `true` if a row was restored.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE temas SET deleted_at = NULL, deleted_by_uid = NULL
             WHERE id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring search over nombre and descripcion.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Tema>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM temas
             WHERE deleted_at IS NULL
               AND (nombre ILIKE $1 OR descripcion ILIKE $1)
             ORDER BY nombre"
        );
        sqlx::query_as::<_, Tema>(&query)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Permanently delete a tema by ID. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM temas WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
