//! In-process repository for `STORAGE=memory` and tests. Rows are kept ordered by id.

use super::Repository;
use crate::entities::Entity;
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

struct Table<E: Entity> {
    rows: BTreeMap<E::Id, E>,
    last_id: i64,
}

pub struct InMemoryRepository<E: Entity> {
    table: RwLock<Table<E>>,
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        InMemoryRepository {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated through `save`, so new rows get ids as they would on creation.
    pub fn with_rows(rows: impl IntoIterator<Item = E>) -> Self {
        let repo = Self::default();
        if let Ok(mut table) = repo.table.write() {
            for row in rows {
                table.store(row);
            }
        }
        repo
    }
}

impl<E: Entity> Table<E> {
    fn store(&mut self, mut entity: E) -> E {
        if entity.is_new() {
            self.last_id += 1;
            entity.assign_id(self.last_id);
        } else if let Some(seq) = entity.seq() {
            self.last_id = self.last_id.max(seq);
        }
        self.rows.insert(entity.id(), entity.clone());
        entity
    }
}

fn lock_poisoned() -> AppError {
    AppError::Internal("repository lock poisoned".into())
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn find_all(&self) -> Result<Vec<E>, AppError> {
        let table = self.table.read().map_err(|_| lock_poisoned())?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>, AppError> {
        let table = self.table.read().map_err(|_| lock_poisoned())?;
        Ok(table.rows.get(id).cloned())
    }

    async fn save(&self, entity: E) -> Result<E, AppError> {
        let mut table = self.table.write().map_err(|_| lock_poisoned())?;
        Ok(table.store(entity))
    }

    async fn delete_by_id(&self, id: &E::Id) -> Result<(), AppError> {
        let mut table = self.table.write().map_err(|_| lock_poisoned())?;
        table.rows.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{UcsbDiningCommonsMenuItem, UcsbOrganization};

    fn item(name: &str) -> UcsbDiningCommonsMenuItem {
        UcsbDiningCommonsMenuItem {
            id: 0,
            dining_commons_code: "ortega".into(),
            name: name.into(),
            station: "Entrees".into(),
        }
    }

    #[tokio::test]
    async fn save_assigns_increasing_ids() {
        let repo = InMemoryRepository::new();
        let a = repo.save(item("Tofu")).await.unwrap();
        let b = repo.save(item("Pasta")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![a, b]);
    }

    #[tokio::test]
    async fn explicit_ids_advance_the_sequence() {
        let seeded = UcsbDiningCommonsMenuItem { id: 2, ..item("Seed") };
        let repo = InMemoryRepository::with_rows([seeded.clone()]);
        let a = repo.save(item("Tofu")).await.unwrap();
        let b = repo.save(item("Pasta")).await.unwrap();
        assert_eq!((a.id, b.id), (3, 4));
        assert_eq!(repo.find_all().await.unwrap(), vec![seeded, a, b]);

        let explicit = UcsbDiningCommonsMenuItem { id: 10, ..item("Ten") };
        repo.save(explicit).await.unwrap();
        assert_eq!(repo.save(item("Next")).await.unwrap().id, 11);
    }

    #[tokio::test]
    async fn save_existing_overwrites_in_place() {
        let repo = InMemoryRepository::with_rows([item("Tofu")]);
        let mut row = repo.find_by_id(&1).await.unwrap().unwrap();
        row.name = "Baked Tofu".into();
        repo.save(row.clone()).await.unwrap();
        assert_eq!(repo.find_all().await.unwrap(), vec![row]);
    }

    #[tokio::test]
    async fn natural_keys_are_kept() {
        let repo = InMemoryRepository::new();
        let org = UcsbOrganization {
            org_code: "KRC".into(),
            org_translation_short: "KOREAN RADIO CL".into(),
            org_translation: "KOREAN RADIO CLUB".into(),
            inactive: false,
        };
        repo.save(org.clone()).await.unwrap();
        assert_eq!(repo.find_by_id(&"KRC".to_string()).await.unwrap(), Some(org));
        repo.delete_by_id(&"KRC".to_string()).await.unwrap();
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
