//! In-memory repository for tests and database-free demos

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{DbError, EntityRepository};
use crate::models::{Entity, EntityFields, EntityKind};

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Entity>,
}

/// Mutex-guarded table with database-like id assignment (ids start at 1 and
/// are never reused)
pub struct MemoryEntityRepository {
    kind: EntityKind,
    table: Mutex<Table>,
}

impl MemoryEntityRepository {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            table: Mutex::new(Table::default()),
        }
    }

    fn table(&self) -> std::sync::MutexGuard<'_, Table> {
        // Every write is a single map operation, so a poisoned table is still consistent.
        self.table.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl EntityRepository for MemoryEntityRepository {
    fn kind(&self) -> EntityKind {
        self.kind
    }

    async fn list(&self) -> Result<Vec<Entity>, DbError> {
        Ok(self.table().rows.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Entity>, DbError> {
        Ok(self.table().rows.get(&id).cloned())
    }

    async fn create(&self, fields: &EntityFields) -> Result<Entity, DbError> {
        let mut table = self.table();
        table.next_id += 1;
        let entity = Entity::from_fields(table.next_id, fields);
        table.rows.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, id: i64, fields: &EntityFields) -> Result<u64, DbError> {
        let mut table = self.table();
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = Entity::from_fields(id, fields);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        Ok(self.table().rows.remove(&id).map_or(0, |_| 1))
    }
}
