//! Row decoding: from the stored integer-frequency shape into engine terms.

use chrono::Weekday;
use shindig_core::types::EventKind;
use shindig_engine::schedule::recurrence::RecurrenceRule;
use shindig_engine::EventSchedule;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::row::EventRow;

/// ## Summary
/// Decodes a stored event row into an [`EventSchedule`].
///
/// Frequency 0 selects an occasional rule over the row's explicit dates;
/// any other frequency selects an every-N-weeks rule, which requires a
/// parsable weekday name and an empty explicit date list.
///
/// ## Errors
/// Returns `MalformedRow` for rows violating those constraints, or for an
/// event that is neither a class nor a social, or an inverted active
/// window. Rejected at the boundary - nothing is coerced.
pub fn schedule_from_row(row: &EventRow) -> StoreResult<EventSchedule> {
    let kind = EventKind::from_flags(row.has_class, row.has_social)
        .map_err(|err| malformed(row.id, err.to_string()))?;

    let rule = if row.frequency == 0 {
        RecurrenceRule::occasional(row.dates.iter().copied().collect())
    } else {
        if !row.dates.is_empty() {
            return Err(malformed(
                row.id,
                "explicit dates must be empty for weekly events".to_string(),
            ));
        }
        let Some(name) = row.weekday.as_deref() else {
            return Err(malformed(
                row.id,
                "weekly events must name a weekday".to_string(),
            ));
        };
        let Ok(weekday) = name.parse::<Weekday>() else {
            return Err(malformed(
                row.id,
                format!("unrecognised weekday name: {name}"),
            ));
        };
        RecurrenceRule::every_weeks(weekday, row.frequency)?
    };

    Ok(
        EventSchedule::new(row.id, row.venue_id, row.title.clone(), kind, rule)
            .with_cancellations(row.cancellations.iter().copied().collect())
            .with_active_window(row.first_active, row.last_active)?,
    )
}

fn malformed(id: Uuid, reason: String) -> StoreError {
    StoreError::MalformedRow { id, reason }
}
