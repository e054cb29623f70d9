//! The store port: how the service layer reaches event records.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::row::EventRow;

/// Trait for event record access.
///
/// Implemented outside this workspace by the real storage layer;
/// [`crate::MemoryEventStore`] implements it for tests. Writing
/// `last_active` back after archival is the only write the engine side
/// ever initiates.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Fetch every event row.
    ///
    /// ## Errors
    /// Whatever the backing storage reports.
    async fn fetch_all(&self) -> StoreResult<Vec<EventRow>>;

    /// Fetch one event row by id; `None` when no such event exists.
    ///
    /// ## Errors
    /// Whatever the backing storage reports.
    async fn fetch_event(&self, id: Uuid) -> StoreResult<Option<EventRow>>;

    /// Persist a newly computed `last_active` bound.
    ///
    /// ## Errors
    /// `EventNotFound` for an unknown id, or whatever the backing storage
    /// reports.
    async fn set_last_active(&self, id: Uuid, last_active: NaiveDate) -> StoreResult<()>;
}
