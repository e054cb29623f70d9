//! The archival action: compute the natural end date and write it back.

use std::sync::Arc;

use chrono::NaiveDate;
use shindig_store::map::schedule_from_row;
use shindig_store::repository::EventStore;
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};

/// Archival service over the event store.
pub struct ArchiveService {
    store: Arc<dyn EventStore>,
}

impl ArchiveService {
    #[must_use]
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// ## Summary
    /// Takes an event out of rotation: computes its natural end date and
    /// persists it as the new `last_active` bound.
    ///
    /// Computing the date is idempotent; the write is not, and an event
    /// already archived is left untouched - the failure surfaces before
    /// any store call.
    ///
    /// ## Errors
    /// `EventNotFound` for an unknown id, `IllegalArchival` when the event
    /// has already ended, or any store/mapping failure.
    pub async fn archive_event(&self, id: Uuid, today: NaiveDate) -> ServiceResult<NaiveDate> {
        let Some(row) = self.store.fetch_event(id).await? else {
            return Err(ServiceError::EventNotFound(id));
        };

        let mut schedule = schedule_from_row(&row)?;
        let ended = schedule.archive(today)?;
        self.store.set_last_active(id, ended).await?;

        tracing::info!(event_id = %id, last_active = %ended, "Event archived");

        Ok(ended)
    }
}
