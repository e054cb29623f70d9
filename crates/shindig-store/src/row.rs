//! The raw event row as the persistence collaborator hands it over.

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

/// One event as stored: recurrence still encoded as an integer frequency,
/// dates already parsed into calendar values (free-text parsing happens
/// upstream, never here).
#[derive(Debug, Clone, Deserialize)]
pub struct EventRow {
    /// Event identity.
    pub id: Uuid,
    /// Non-owning reference to the venue.
    pub venue_id: Uuid,
    /// Listing title.
    pub title: String,
    /// Runs a class.
    pub has_class: bool,
    /// Runs a social.
    pub has_social: bool,
    /// 0 = occasional, 1 = weekly, N = every N weeks.
    pub frequency: u16,
    /// Weekday name for weekly-family events ("Thursday").
    pub weekday: Option<String>,
    /// First date the event is active.
    pub first_active: Option<NaiveDate>,
    /// Last date the event is active.
    pub last_active: Option<NaiveDate>,
    /// Explicit instance dates (occasional events only).
    #[serde(default)]
    pub dates: Vec<NaiveDate>,
    /// Dates on which an otherwise-occurring instance is cancelled.
    #[serde(default)]
    pub cancellations: Vec<NaiveDate>,
}
