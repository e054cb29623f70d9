//! Recurrence rules: how an event's ordinary occurrences are generated.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::dates::date_set::DateSet;
use crate::error::{EngineError, EngineResult};

/// How an event recurs.
///
/// The original directory overloaded a single integer "frequency" column
/// (0 = occasional, 1 = weekly, N = every N weeks); here the two shapes are
/// distinct variants and the N-week interval is ordinary data on `Weekly`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceRule {
    /// Recurs on every instance of `weekday`, unbounded unless the owning
    /// schedule carries active-window bounds. `interval_weeks` is 1 for
    /// weekly, 2 for fortnightly, and so on; it classifies the event but
    /// does not refine [`RecurrenceRule::occurs_on`] - listings have always
    /// matched these events on weekday alone, and that stays observable.
    Weekly {
        weekday: Weekday,
        interval_weeks: u16,
    },

    /// Occurs only on the listed dates.
    Occasional { dates: DateSet },
}

impl RecurrenceRule {
    /// An ordinary weekly rule.
    #[must_use]
    pub const fn weekly(weekday: Weekday) -> Self {
        Self::Weekly {
            weekday,
            interval_weeks: 1,
        }
    }

    /// An every-N-weeks rule (fortnightly, four-weekly, ...).
    ///
    /// ## Errors
    /// Returns `InvalidRecurrence` for a zero-week interval.
    pub fn every_weeks(weekday: Weekday, interval_weeks: u16) -> EngineResult<Self> {
        if interval_weeks == 0 {
            return Err(EngineError::InvalidRecurrence(
                "weekly interval must be at least one week",
            ));
        }
        Ok(Self::Weekly {
            weekday,
            interval_weeks,
        })
    }

    /// A rule occurring only on the given explicit dates.
    #[must_use]
    pub fn occasional(dates: DateSet) -> Self {
        Self::Occasional { dates }
    }

    #[must_use]
    pub const fn is_weekly(&self) -> bool {
        matches!(self, Self::Weekly { .. })
    }

    /// The fixed weekday, when the rule has one.
    #[must_use]
    pub const fn weekday(&self) -> Option<Weekday> {
        match self {
            Self::Weekly { weekday, .. } => Some(*weekday),
            Self::Occasional { .. } => None,
        }
    }

    /// ## Summary
    /// Would this rule produce an instance on `date`?
    ///
    /// Purely the recurrence shape - active-window bounds and cancellations
    /// belong to the owning schedule.
    #[must_use]
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        match self {
            Self::Weekly { weekday, .. } => date.weekday() == *weekday,
            Self::Occasional { dates } => dates.contains(date),
        }
    }
}
