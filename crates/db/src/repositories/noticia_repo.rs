//! Repository for the `noticias` table.

use sqlx::PgPool;
use tecnica_core::search::contains_pattern;
use tecnica_core::types::DbId;

use crate::models::noticia::{CreateNoticia, Noticia, UpdateNoticia};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, titulo, tipo, contenido, enlace_url, imagen_url, estado, \
    created_by_uid, deleted_by_uid, deleted_at, created_at, updated_at";

/// Provides CRUD operations for noticias.
pub struct NoticiaRepo;

impl NoticiaRepo {
    /// Insert a new noticia, stamping the acting user as owner.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNoticia,
        actor_id: DbId,
    ) -> Result<Noticia, sqlx::Error> {
        let query = format!(
            "INSERT INTO noticias
                (titulo, tipo, contenido, enlace_url, imagen_url, estado, created_by_uid)
             VALUES ($1, COALESCE($2, 'article'::noticia_tipo), $3, $4, $5,
                     COALESCE($6, 'borrador'::estado_publicacion), $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Noticia>(&query)
            .bind(&input.titulo)
            .bind(input.tipo)
            .bind(&input.contenido)
            .bind(&input.enlace_url)
            .bind(&input.imagen_url)
            .bind(input.estado)
            .bind(actor_id)
            .fetch_one(pool)
            .await
    }

    /// Find a noticia by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Noticia>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM noticias WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Noticia>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List noticias ordered by titulo.
    ///
    /// Soft-deleted rows are included only when `include_deleted` is true.
    pub async fn list(pool: &PgPool, include_deleted: bool) -> Result<Vec<Noticia>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM noticias
             WHERE ($1 OR deleted_at IS NULL)
             ORDER BY titulo"
        );
        sqlx::query_as::<_, Noticia>(&query)
            .bind(include_deleted)
            .fetch_all(pool)
            .await
    }

    /// List published noticias for the public feed, newest first.
    ///
    /// The feed is the one unbounded public collection, so it paginates;
    /// callers clamp `limit`/`offset` before calling.
    pub async fn list_publicadas(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Noticia>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM noticias
             WHERE deleted_at IS NULL AND estado = 'publicada'::estado_publicacion
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Noticia>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List all live noticias owned by a user ("my news" dashboard),
    /// newest first, regardless of publication state.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Noticia>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM noticias
             WHERE created_by_uid = $1 AND deleted_at IS NULL
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Noticia>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Update a noticia. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNoticia,
    ) -> Result<Option<Noticia>, sqlx::Error> {
        let query = format!(
            "UPDATE noticias SET
                titulo = COALESCE($2, titulo),
                tipo = COALESCE($3, tipo),
                contenido = COALESCE($4, contenido),
                enlace_url = COALESCE($5, enlace_url),
                imagen_url = COALESCE($6, imagen_url),
                estado = COALESCE($7, estado),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Noticia>(&query)
            .bind(id)
            .bind(&input.titulo)
            .bind(input.tipo)
            .bind(&input.contenido)
            .bind(&input.enlace_url)
            .bind(&input.imagen_url)
            .bind(input.estado)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a noticia, stamping the acting user.
    /// Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId, actor_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE noticias SET deleted_at = NOW(), deleted_by_uid = $2
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(actor_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore a soft-deleted noticia. Returns `true` if a row was restored.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE noticias SET deleted_at = NULL, deleted_by_uid = NULL
             WHERE id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring search over titulo and contenido.
    /// Only published, non-deleted entries are searched.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Noticia>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM noticias
             WHERE deleted_at IS NULL
               AND estado = 'publicada'::estado_publicacion
               AND (titulo ILIKE $1 OR contenido ILIKE $1)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Noticia>(&query)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Permanently delete a noticia by ID. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM noticias WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
