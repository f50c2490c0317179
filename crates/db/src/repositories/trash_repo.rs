//! Repository for cross-table trash / bin operations.
//!
//! Provides a unified view of soft-deleted rows across all entity tables,
//! plus bulk and single-item purge (hard delete) for the admin dashboard.

use serde::Serialize;
use sqlx::PgPool;
use tecnica_core::types::{DbId, Timestamp};

/// Known entity types that support soft-delete.
const KNOWN_ENTITY_TYPES: &[&str] = &[
    "personas",
    "noticias",
    "proyectos",
    "organizaciones",
    "temas",
    "entrevistas",
];

/// A single soft-deleted item surfaced in the trash list.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TrashedItem {
    pub id: DbId,
    pub entity_type: String,
    pub name_or_label: Option<String>,
    pub deleted_at: Timestamp,
    pub deleted_by_uid: Option<DbId>,
}

/// Summary returned by [`TrashRepo::list_trashed`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrashSummary {
    pub items: Vec<TrashedItem>,
    pub total_count: i64,
}

/// Preview of what a purge-all would remove.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurgePreview {
    pub counts_by_type: Vec<PurgeCount>,
    pub total_count: i64,
}

/// Per-entity-type count of soft-deleted rows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurgeCount {
    pub entity_type: String,
    pub count: i64,
}

/// Returns `true` if `entity_type` is one of the known types.
pub fn is_known_entity_type(entity_type: &str) -> bool {
    KNOWN_ENTITY_TYPES.contains(&entity_type)
}

/// Provides cross-table trash operations.
pub struct TrashRepo;

impl TrashRepo {
    /// List all soft-deleted items across entity tables.
    ///
    /// When `entity_type` is `Some`, only that single table is queried.
    /// Results are ordered by `deleted_at DESC`.
    pub async fn list_trashed(
        pool: &PgPool,
        entity_type: Option<&str>,
    ) -> Result<TrashSummary, sqlx::Error> {
        let items = match entity_type {
            Some(et) => Self::list_trashed_single(pool, et).await?,
            None => Self::list_trashed_all(pool).await?,
        };
        let total_count = items.len() as i64;
        Ok(TrashSummary { items, total_count })
    }

    /// Query a single entity table for soft-deleted rows.
    async fn list_trashed_single(
        pool: &PgPool,
        entity_type: &str,
    ) -> Result<Vec<TrashedItem>, sqlx::Error> {
        let name_expr = name_expr(entity_type);
        let sql = format!(
            "SELECT id, '{entity_type}' AS entity_type, {name_expr} AS name_or_label, \
             deleted_at, deleted_by_uid FROM {entity_type} WHERE deleted_at IS NOT NULL \
             ORDER BY deleted_at DESC"
        );
        sqlx::query_as::<_, TrashedItem>(&sql).fetch_all(pool).await
    }

    /// UNION ALL across every entity table for soft-deleted rows.
    async fn list_trashed_all(pool: &PgPool) -> Result<Vec<TrashedItem>, sqlx::Error> {
        let unions: Vec<String> = KNOWN_ENTITY_TYPES
            .iter()
            .map(|et| {
                let name_expr = name_expr(et);
                format!(
                    "SELECT id, '{et}' AS entity_type, {name_expr} AS name_or_label, \
                     deleted_at, deleted_by_uid FROM {et} WHERE deleted_at IS NOT NULL"
                )
            })
            .collect();
        let sql = format!("{} ORDER BY deleted_at DESC", unions.join(" UNION ALL "));
        sqlx::query_as::<_, TrashedItem>(&sql).fetch_all(pool).await
    }

    /// Preview what a purge-all would remove: counts per entity type.
    pub async fn purge_preview(pool: &PgPool) -> Result<PurgePreview, sqlx::Error> {
        let mut counts_by_type = Vec::new();
        let mut total_count: i64 = 0;

        for et in KNOWN_ENTITY_TYPES {
            let sql = format!("SELECT COUNT(*) FROM {et} WHERE deleted_at IS NOT NULL");
            let count: (i64,) = sqlx::query_as(&sql).fetch_one(pool).await?;
            if count.0 > 0 {
                counts_by_type.push(PurgeCount {
                    entity_type: (*et).to_string(),
                    count: count.0,
                });
                total_count += count.0;
            }
        }

        Ok(PurgePreview {
            counts_by_type,
            total_count,
        })
    }

    /// Hard-delete all soft-deleted records across every entity table.
    ///
    /// `tema_vinculos` rows referencing purged temas go away via
    /// `ON DELETE CASCADE`; links held by purged personas/noticias/proyectos
    /// are swept afterwards (the junction table has no FK on `entity_id`).
    pub async fn purge_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let mut total: u64 = 0;
        for et in KNOWN_ENTITY_TYPES {
            let sql = format!("DELETE FROM {et} WHERE deleted_at IS NOT NULL");
            let result = sqlx::query(&sql).execute(pool).await?;
            total += result.rows_affected();
        }

        for et in ["personas", "noticias", "proyectos"] {
            let sql = format!(
                "DELETE FROM tema_vinculos v
                 WHERE v.entity_type = '{et}'
                   AND NOT EXISTS (SELECT 1 FROM {et} e WHERE e.id = v.entity_id)"
            );
            sqlx::query(&sql).execute(pool).await?;
        }

        Ok(total)
    }

    /// Hard-delete a single soft-deleted record.
    ///
    /// Returns `true` if a row was removed, `false` if no matching
    /// soft-deleted row exists.
    pub async fn purge_one(
        pool: &PgPool,
        entity_type: &str,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let sql = format!("DELETE FROM {entity_type} WHERE id = $1 AND deleted_at IS NOT NULL");
        let result = sqlx::query(&sql).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

/// SQL expression yielding a human-readable label for an entity table.
///
/// Callers validate `entity_type` against [`is_known_entity_type`] first,
/// so table names are never taken from raw user input.
fn name_expr(entity_type: &str) -> &'static str {
    match entity_type {
        "personas" => "nombre || ' ' || apellido",
        "noticias" => "titulo",
        "proyectos" => "titulo",
        "organizaciones" => "nombre_oficial",
        "temas" => "nombre",
        "entrevistas" => "titulo",
        // Unreachable when callers validate entity_type first
        _ => "NULL::text",
    }
}
