//! Generic repository over PostgreSQL using the safe SQL builder.

use super::Repository;
use crate::entities::Entity;
use crate::error::AppError;
use crate::sql::{delete, insert, select_all, select_by_id, upsert, PgBindValue, QueryBuf, TableDef};
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};
use std::marker::PhantomData;

/// An entity with a PostgreSQL table definition.
pub trait PgEntity: Entity + for<'r> FromRow<'r, PgRow> {
    const TABLE: TableDef;

    /// Values for `TABLE.columns`, in the same order.
    fn column_values(&self) -> Vec<PgBindValue>;
}

pub struct PgRepository<E> {
    pool: PgPool,
    schema: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E> PgRepository<E> {
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        PgRepository {
            pool,
            schema: schema.into(),
            _entity: PhantomData,
        }
    }
}

impl<E: PgEntity> PgRepository<E> {
    async fn fetch_many(&self, q: QueryBuf) -> Result<Vec<E>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let QueryBuf { sql, params } = q;
        let mut query = sqlx::query_as::<_, E>(&sql);
        for p in params {
            query = query.bind(p);
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn fetch_optional(&self, q: QueryBuf) -> Result<Option<E>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let QueryBuf { sql, params } = q;
        let mut query = sqlx::query_as::<_, E>(&sql);
        for p in params {
            query = query.bind(p);
        }
        Ok(query.fetch_optional(&self.pool).await?)
    }
}

#[async_trait]
impl<E> Repository<E> for PgRepository<E>
where
    E: PgEntity,
    E::Id: Into<PgBindValue>,
{
    async fn find_all(&self) -> Result<Vec<E>, AppError> {
        self.fetch_many(select_all(&self.schema, &E::TABLE)).await
    }

    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>, AppError> {
        self.fetch_optional(select_by_id(&self.schema, &E::TABLE, id.clone().into()))
            .await
    }

    async fn save(&self, entity: E) -> Result<E, AppError> {
        let q = if entity.is_new() && E::TABLE.pk_generated {
            insert(&self.schema, &E::TABLE, entity.column_values())
        } else {
            upsert(&self.schema, &E::TABLE, entity.id().into(), entity.column_values())
        };
        self.fetch_optional(q)
            .await?
            .ok_or_else(|| AppError::Db(sqlx::Error::RowNotFound))
    }

    async fn delete_by_id(&self, id: &E::Id) -> Result<(), AppError> {
        let q = delete(&self.schema, &E::TABLE, id.clone().into());
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let QueryBuf { sql, params } = q;
        let mut query = sqlx::query(&sql);
        for p in params {
            query = query.bind(p);
        }
        query.execute(&self.pool).await?;
        Ok(())
    }
}
