//! Archival policy: the natural last date for an event leaving the rotation.

use chrono::NaiveDate;

use super::EventSchedule;
use super::recurrence::RecurrenceRule;
use crate::dates::previous_occurring;

/// ## Summary
/// Computes the `last_active` bound an event should receive when archived.
///
/// In priority order:
/// 1. Weekly events end on the most recent past occurrence of their weekday,
///    strictly before `today`.
/// 2. An occasional event with no recorded dates ended before it ever began:
///    the minimum representable date.
/// 3. Otherwise, the latest known explicit date.
///
/// Pure and idempotent - computing twice without an intervening mutation
/// yields the same date. Writing the result back is the caller's business.
#[must_use]
pub fn archive_date(schedule: &EventSchedule, today: NaiveDate) -> NaiveDate {
    match schedule.rule() {
        RecurrenceRule::Weekly { weekday, .. } => previous_occurring(today, *weekday),
        RecurrenceRule::Occasional { dates } => {
            dates.max_date().unwrap_or(NaiveDate::MIN)
        }
    }
}
