//! Repository for the `organizaciones` table.

use sqlx::PgPool;
use tecnica_core::search::contains_pattern;
use tecnica_core::types::DbId;

use crate::models::estado::EstadoVerificacion;
use crate::models::organizacion::{CreateOrganizacion, Organizacion, UpdateOrganizacion};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nombre_oficial, nombre_fantasia, tipo, logo_url, areas_de_interes, \
    estado_verificacion, created_by_uid, deleted_by_uid, deleted_at, created_at, updated_at";

/// Provides CRUD operations for organizaciones.
pub struct OrganizacionRepo;

impl OrganizacionRepo {
    /// Insert a new organizacion, stamping the acting user as owner.
    /// New rows start in `pendiente` verification state.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOrganizacion,
        actor_id: DbId,
    ) -> Result<Organizacion, sqlx::Error> {
        let query = format!(
            "INSERT INTO organizaciones
                (nombre_oficial, nombre_fantasia, tipo, logo_url, areas_de_interes, created_by_uid)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Organizacion>(&query)
            .bind(&input.nombre_oficial)
            .bind(&input.nombre_fantasia)
            .bind(&input.tipo)
            .bind(&input.logo_url)
            .bind(&input.areas_de_interes)
            .bind(actor_id)
            .fetch_one(pool)
            .await
    }

    /// Find an organizacion by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Organizacion>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM organizaciones WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Organizacion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List organizaciones ordered by nombre_oficial, optionally filtered
    /// by verification state (server-side "pending" subsets).
    ///
    /// Soft-deleted rows are included only when `include_deleted` is true.
    pub async fn list(
        pool: &PgPool,
        include_deleted: bool,
        estado_verificacion: Option<EstadoVerificacion>,
    ) -> Result<Vec<Organizacion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM organizaciones
             WHERE ($1 OR deleted_at IS NULL)
               AND ($2::estado_verificacion IS NULL OR estado_verificacion = $2)
             ORDER BY nombre_oficial"
        );
        sqlx::query_as::<_, Organizacion>(&query)
            .bind(include_deleted)
            .bind(estado_verificacion)
            .fetch_all(pool)
            .await
    }

    /// List all live organizaciones registered by a user, newest first.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<Organizacion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM organizaciones
             WHERE created_by_uid = $1 AND deleted_at IS NULL
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Organizacion>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Update an organizacion. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOrganizacion,
    ) -> Result<Option<Organizacion>, sqlx::Error> {
        let query = format!(
            "UPDATE organizaciones SET
                nombre_oficial = COALESCE($2, nombre_oficial),
                nombre_fantasia = COALESCE($3, nombre_fantasia),
                tipo = COALESCE($4, tipo),
                logo_url = COALESCE($5, logo_url),
                areas_de_interes = COALESCE($6, areas_de_interes),
                estado_verificacion = COALESCE($7, estado_verificacion),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Organizacion>(&query)
            .bind(id)
            .bind(&input.nombre_oficial)
            .bind(&input.nombre_fantasia)
            .bind(&input.tipo)
            .bind(&input.logo_url)
            .bind(&input.areas_de_interes)
            .bind(input.estado_verificacion)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an organizacion, stamping the acting user.
    /// Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId, actor_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE organizaciones SET deleted_at = NOW(), deleted_by_uid = $2
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(actor_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore a soft-deleted organizacion. Returns `true` if a row was restored.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE organizaciones SET deleted_at = NULL, deleted_by_uid = NULL
             WHERE id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring search over both names and areas of
    /// interest. Only non-deleted rows are searched.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Organizacion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM organizaciones
             WHERE deleted_at IS NULL
               AND (nombre_oficial ILIKE $1
                    OR nombre_fantasia ILIKE $1
                    OR EXISTS (SELECT 1 FROM unnest(areas_de_interes) a WHERE a ILIKE $1))
             ORDER BY nombre_oficial"
        );
        sqlx::query_as::<_, Organizacion>(&query)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Permanently delete an organizacion by ID. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM organizaciones WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
