//! Cross-event occurrence queries: "what's on" for a date or date window.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::schedule::EventSchedule;

/// One event occurring on one date - transient, never persisted.
///
/// Cancelled occurrences are produced too, flagged, so listings can show a
/// "cancelled" annotation instead of silently dropping the night.
#[derive(Debug, Clone, Copy)]
pub struct Occurrence<'a> {
    pub date: NaiveDate,
    pub schedule: &'a EventSchedule,
    pub cancelled: bool,
}

/// Caller-supplied presentation order for occurrences sharing a date.
pub type ScheduleOrder = fn(&EventSchedule, &EventSchedule) -> Ordering;

/// The directory's usual ordering: title, ascending.
#[must_use]
pub fn by_title(a: &EventSchedule, b: &EventSchedule) -> Ordering {
    a.title().cmp(b.title())
}

/// ## Summary
/// Every event occurring on `date`: the recurrence produces an instance and
/// the date is inside the active window.
///
/// Cancellation does not exclude - it is reported on the occurrence. Sorted
/// by `order`, ties broken by schedule id so output is deterministic across
/// calls.
#[must_use]
pub fn occurrences_on<'a>(
    date: NaiveDate,
    schedules: &'a [EventSchedule],
    order: ScheduleOrder,
) -> Vec<Occurrence<'a>> {
    let mut occurrences: Vec<Occurrence<'a>> = schedules
        .iter()
        .filter(|schedule| schedule.occurs_on(date) && schedule.is_active_on(date))
        .map(|schedule| Occurrence {
            date,
            schedule,
            cancelled: schedule.is_cancelled_on(date),
        })
        .collect();
    occurrences.sort_by(|a, b| {
        order(a.schedule, b.schedule).then_with(|| a.schedule.id().cmp(&b.schedule.id()))
    });
    occurrences
}

/// [`occurrences_on`] restricted to events at one venue.
#[must_use]
pub fn occurrences_on_for_venue<'a>(
    date: NaiveDate,
    venue_id: Uuid,
    schedules: &'a [EventSchedule],
    order: ScheduleOrder,
) -> Vec<Occurrence<'a>> {
    let mut occurrences = occurrences_on(date, schedules, order);
    occurrences.retain(|occurrence| occurrence.schedule.venue_id() == venue_id);
    occurrences
}

/// ## Summary
/// Occurrences for each date in `from .. from + day_count - 1` inclusive,
/// keyed by date. Dates with nothing on map to empty sequences.
///
/// Any non-negative `day_count` is accepted - upper policy caps (the
/// directory lists 14 days) belong to the caller. A window reaching past
/// the end of the representable calendar is clipped there.
///
/// ## Errors
/// Returns `InvalidRange` for a negative `day_count`.
pub fn windowed_occurrences<'a>(
    from: NaiveDate,
    day_count: i64,
    schedules: &'a [EventSchedule],
    order: ScheduleOrder,
) -> EngineResult<BTreeMap<NaiveDate, Vec<Occurrence<'a>>>> {
    if day_count < 0 {
        return Err(EngineError::InvalidRange { days: day_count });
    }

    let mut window = BTreeMap::new();
    let mut date = from;
    for _ in 0..day_count {
        window.insert(date, occurrences_on(date, schedules, order));
        let Some(next) = date.succ_opt() else {
            break;
        };
        date = next;
    }
    Ok(window)
}
