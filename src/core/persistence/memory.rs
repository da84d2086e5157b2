use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use tokio::sync::RwLock;

use crate::core::resource::{AuditTimestamps, DeleteStrategy, Resource};
use crate::core::traits::CrudRepository;
use crate::core::Result;

#[derive(Debug)]
struct StoredRow<E> {
    entity: E,
    deleted_at: Option<NaiveDateTime>,
}

impl<E> StoredRow<E> {
    fn is_live(&self) -> bool {
        self.deleted_at.is_none()
    }
}

#[derive(Debug)]
struct Table<E> {
    last_id: i64,
    rows: BTreeMap<i64, StoredRow<E>>,
}

impl<E: Resource> Table<E> {
    fn live(&self) -> impl Iterator<Item = &E> {
        self.rows
            .values()
            .filter(|row| row.is_live())
            .map(|row| &row.entity)
    }

    fn live_row(&self, id: i64) -> Option<&StoredRow<E>> {
        self.rows.get(&id).filter(|row| row.is_live())
    }

    fn remove(&mut self, id: i64, now: NaiveDateTime) {
        match E::DELETE_STRATEGY {
            DeleteStrategy::Physical => {
                self.rows.remove(&id);
            }
            DeleteStrategy::Soft => {
                if let Some(row) = self.rows.get_mut(&id) {
                    row.deleted_at.get_or_insert(now);
                }
            }
        }
    }
}

/// Process-local repository with sequential ids
///
/// Honours the same contract as the MySQL repository, soft deletes included:
/// marked rows stay in the map but are invisible to every read.
#[derive(Debug)]
pub struct InMemoryRepository<E> {
    table: RwLock<Table<E>>,
}

impl<E> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                last_id: 0,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Resource> InMemoryRepository<E> {
    /// Number of rows physically held, soft-deleted ones included
    pub async fn stored_rows(&self) -> usize {
        self.table.read().await.rows.len()
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[async_trait]
impl<E: Resource> CrudRepository<E> for InMemoryRepository<E> {
    async fn find_all(&self) -> Result<Vec<E>> {
        Ok(self.table.read().await.live().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<E>> {
        let table = self.table.read().await;
        Ok(table.live_row(id).map(|row| row.entity.clone()))
    }

    async fn find_all_containing(&self, text: &str) -> Result<Vec<E>> {
        let table = self.table.read().await;
        Ok(table
            .live()
            .filter(|entity| entity.search_field().contains(text))
            .cloned()
            .collect())
    }

    async fn save(&self, mut entity: E) -> Result<E> {
        let mut table = self.table.write().await;
        let now = now();

        let previous = entity
            .id()
            .and_then(|id| table.live_row(id))
            .map(|row| row.entity.timestamps().clone());

        let id = match (entity.id(), previous) {
            (Some(id), Some(previous)) => {
                *entity.timestamps_mut() = AuditTimestamps::updated(&previous, now);
                id
            }
            _ => {
                table.last_id += 1;
                *entity.timestamps_mut() = AuditTimestamps::inserted(now);
                table.last_id
            }
        };

        entity.set_id(id);
        table.rows.insert(
            id,
            StoredRow {
                entity: entity.clone(),
                deleted_at: None,
            },
        );

        Ok(entity)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.table.read().await.live_row(id).is_some())
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.table.write().await.remove(id, now());
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        let mut table = self.table.write().await;
        let now = now();
        let ids: Vec<i64> = table.rows.keys().copied().collect();
        for id in ids {
            table.remove(id, now);
        }
        Ok(())
    }
}
