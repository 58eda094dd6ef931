//! Create the entity tables. Idempotent: every statement is IF NOT EXISTS.

use crate::entities::{MenuItemReview, RecommendationRequest, UcsbDiningCommonsMenuItem, UcsbOrganization};
use crate::error::AppError;
use crate::repository::PgEntity;
use crate::sql::{create_table, TableDef};
use crate::store::ensure_schema;
use sqlx::PgPool;

/// Every table the API persists to.
pub const TABLES: &[TableDef] = &[
    MenuItemReview::TABLE,
    UcsbDiningCommonsMenuItem::TABLE,
    RecommendationRequest::TABLE,
    UcsbOrganization::TABLE,
];

pub async fn apply_migrations(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    ensure_schema(pool, schema).await?;
    for def in TABLES {
        let ddl = create_table(schema, def);
        tracing::debug!(sql = %ddl, "migration");
        sqlx::query(&ddl).execute(pool).await?;
    }
    tracing::info!(schema, tables = TABLES.len(), "migrations applied");
    Ok(())
}
