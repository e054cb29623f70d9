//! In-memory event store for tests and demos.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::repository::EventStore;
use crate::row::EventRow;

/// An [`EventStore`] holding rows in a map.
#[derive(Debug, Default)]
pub struct MemoryEventStore {
    rows: RwLock<HashMap<Uuid, EventRow>>,
}

impl MemoryEventStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with `rows`.
    #[must_use]
    pub fn with_rows(rows: impl IntoIterator<Item = EventRow>) -> Self {
        Self {
            rows: RwLock::new(rows.into_iter().map(|row| (row.id, row)).collect()),
        }
    }

    /// Inserts or replaces a row.
    pub async fn upsert(&self, row: EventRow) {
        self.rows.write().await.insert(row.id, row);
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn fetch_all(&self) -> StoreResult<Vec<EventRow>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn fetch_event(&self, id: Uuid) -> StoreResult<Option<EventRow>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn set_last_active(&self, id: Uuid, last_active: NaiveDate) -> StoreResult<()> {
        let mut rows = self.rows.write().await;
        let row = rows.get_mut(&id).ok_or(StoreError::EventNotFound(id))?;
        row.last_active = Some(last_active);
        Ok(())
    }
}
