//! Repository: find/save/delete over one entity type, backed by PostgreSQL or memory.

mod memory;
mod postgres;

pub use memory::InMemoryRepository;
pub use postgres::{PgEntity, PgRepository};

use crate::entities::Entity;
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Every row, ordered by identifier.
    async fn find_all(&self) -> Result<Vec<E>, AppError>;

    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>, AppError>;

    /// Inserts when `entity.is_new()` (the store assigns the id), otherwise inserts or
    /// overwrites the row with the entity's id. Returns the stored row.
    async fn save(&self, entity: E) -> Result<E, AppError>;

    async fn delete_by_id(&self, id: &E::Id) -> Result<(), AppError>;
}
