//! Generic CRUD over one repository: the single place absence becomes `EntityNotFound`.

use crate::entities::Entity;
use crate::error::AppError;
use crate::repository::Repository;
use std::sync::Arc;

pub struct CrudService<E: Entity> {
    repo: Arc<dyn Repository<E>>,
}

impl<E: Entity> Clone for CrudService<E> {
    fn clone(&self) -> Self {
        CrudService {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<E: Entity> CrudService<E> {
    pub fn new(repo: Arc<dyn Repository<E>>) -> Self {
        CrudService { repo }
    }

    pub async fn list(&self) -> Result<Vec<E>, AppError> {
        self.repo.find_all().await
    }

    /// Persist a new record. The store assigns the identifier unless the entity carries a natural key.
    pub async fn create(&self, entity: E) -> Result<E, AppError> {
        let saved = self.repo.save(entity).await?;
        tracing::info!(entity = E::NAME, id = %saved.id(), "created");
        Ok(saved)
    }

    pub async fn get(&self, id: &E::Id) -> Result<E, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(E::NAME, id))
    }

    /// Replace every field of an existing record; the identifier stays the one looked up.
    pub async fn update(&self, id: &E::Id, replacement: E) -> Result<E, AppError> {
        let mut existing = self.get(id).await?;
        existing.overwrite_with(replacement);
        let saved = self.repo.save(existing).await?;
        tracing::info!(entity = E::NAME, id = %id, "updated");
        Ok(saved)
    }

    /// Remove an existing record and return the confirmation message.
    pub async fn delete(&self, id: &E::Id) -> Result<String, AppError> {
        self.get(id).await?;
        self.repo.delete_by_id(id).await?;
        tracing::info!(entity = E::NAME, id = %id, "deleted");
        Ok(format!("{} with id {} deleted", E::NAME, id))
    }
}
