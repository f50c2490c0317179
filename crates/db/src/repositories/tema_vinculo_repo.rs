//! Repository for the `tema_vinculos` junction table.
//!
//! One polymorphic table links temas to personas, noticias, and proyectos.
//! Links are managed as a whole set per entity: `set_for_entity` replaces
//! the entity's links with the given tema ids.

use sqlx::PgPool;
use tecnica_core::types::DbId;

use crate::models::tema::TemaInfo;

/// Entity types that can be linked to temas.
const LINKABLE_ENTITY_TYPES: &[&str] = &["personas", "noticias", "proyectos"];

/// Returns `true` if `entity_type` supports tema links.
pub fn is_linkable_entity_type(entity_type: &str) -> bool {
    LINKABLE_ENTITY_TYPES.contains(&entity_type)
}

/// Provides operations on tema links.
pub struct TemaVinculoRepo;

impl TemaVinculoRepo {
    /// List the live temas linked to an entity, ordered by nombre.
    pub async fn list_for_entity(
        pool: &PgPool,
        entity_type: &str,
        entity_id: DbId,
    ) -> Result<Vec<TemaInfo>, sqlx::Error> {
        sqlx::query_as::<_, TemaInfo>(
            "SELECT t.id, t.nombre, t.categoria_tema
             FROM tema_vinculos v
             JOIN temas t ON t.id = v.tema_id
             WHERE v.entity_type = $1 AND v.entity_id = $2 AND t.deleted_at IS NULL
             ORDER BY t.nombre",
        )
        .bind(entity_type)
        .bind(entity_id)
        .fetch_all(pool)
        .await
    }

    /// Replace an entity's tema links with exactly `tema_ids`.
    ///
    /// Runs delete + insert in one transaction so concurrent readers never
    /// observe a half-replaced set. Unknown tema ids violate the foreign
    /// key and roll the whole replacement back.
    pub async fn set_for_entity(
        pool: &PgPool,
        entity_type: &str,
        entity_id: DbId,
        tema_ids: &[DbId],
        actor_id: DbId,
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM tema_vinculos WHERE entity_type = $1 AND entity_id = $2")
            .bind(entity_type)
            .bind(entity_id)
            .execute(&mut *tx)
            .await?;

        for tema_id in tema_ids {
            sqlx::query(
                "INSERT INTO tema_vinculos (entity_type, entity_id, tema_id, created_by_uid)
                 VALUES ($1, $2, $3, $4)
                 ON CONFLICT ON CONSTRAINT uq_tema_vinculos DO NOTHING",
            )
            .bind(entity_type)
            .bind(entity_id)
            .bind(tema_id)
            .bind(actor_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await
    }

    /// List the ids of entities of one type linked to a tema.
    pub async fn list_entity_ids_for_tema(
        pool: &PgPool,
        tema_id: DbId,
        entity_type: &str,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT entity_id FROM tema_vinculos
             WHERE tema_id = $1 AND entity_type = $2
             ORDER BY entity_id",
        )
        .bind(tema_id)
        .bind(entity_type)
        .fetch_all(pool)
        .await
    }

    /// Remove every link for an entity (used when an entity is purged).
    pub async fn delete_for_entity(
        pool: &PgPool,
        entity_type: &str,
        entity_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM tema_vinculos WHERE entity_type = $1 AND entity_id = $2")
                .bind(entity_type)
                .bind(entity_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }
}
