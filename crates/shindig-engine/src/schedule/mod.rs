//! Per-event schedules: one recurrence rule, cancellations, active-window
//! bounds, and the date-resolution contract listings are built on.

pub mod archive;
pub mod recurrence;

use chrono::{Days, NaiveDate};
use shindig_core::constants::CONSIDERED_NEW_FOR_DAYS;
use shindig_core::types::EventKind;
use uuid::Uuid;

use self::recurrence::RecurrenceRule;
use crate::dates::date_set::DateSet;
use crate::dates::occurring_on_or_after;
use crate::error::{EngineError, EngineResult};

/// The schedule of one listed event.
///
/// Owns exactly one [`RecurrenceRule`], a cancellation [`DateSet`], and
/// optional first/last active bounds. Derived values (`ordered_dates`,
/// `latest_known_date`) are recomputed from the owned date set on every
/// call, so a schedule has no cache state to invalidate and is freely
/// shareable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSchedule {
    id: Uuid,
    venue_id: Uuid,
    title: String,
    kind: EventKind,
    rule: RecurrenceRule,
    cancellations: DateSet,
    first_active: Option<NaiveDate>,
    last_active: Option<NaiveDate>,
}

impl EventSchedule {
    /// Creates an unbounded schedule with no cancellations.
    #[must_use]
    pub fn new(
        id: Uuid,
        venue_id: Uuid,
        title: impl Into<String>,
        kind: EventKind,
        rule: RecurrenceRule,
    ) -> Self {
        Self {
            id,
            venue_id,
            title: title.into(),
            kind,
            rule,
            cancellations: DateSet::new(),
            first_active: None,
            last_active: None,
        }
    }

    /// Sets the cancellation dates.
    #[must_use]
    pub fn with_cancellations(mut self, cancellations: DateSet) -> Self {
        self.cancellations = cancellations;
        self
    }

    /// Sets the first/last active bounds.
    ///
    /// ## Errors
    /// Returns `InvalidRecurrence` when both bounds are present and
    /// `first` is after `last`.
    pub fn with_active_window(
        mut self,
        first: Option<NaiveDate>,
        last: Option<NaiveDate>,
    ) -> EngineResult<Self> {
        check_window(first, last)?;
        self.first_active = first;
        self.last_active = last;
        Ok(self)
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub const fn venue_id(&self) -> Uuid {
        self.venue_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    #[must_use]
    pub const fn rule(&self) -> &RecurrenceRule {
        &self.rule
    }

    #[must_use]
    pub const fn cancellations(&self) -> &DateSet {
        &self.cancellations
    }

    #[must_use]
    pub const fn first_active(&self) -> Option<NaiveDate> {
        self.first_active
    }

    #[must_use]
    pub const fn last_active(&self) -> Option<NaiveDate> {
        self.last_active
    }

    /// Is `date` inside the schedule's active window?
    #[must_use]
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.first_active.is_none_or(|first| first <= date)
            && self.last_active.is_none_or(|last| last >= date)
    }

    /// Would the recurrence rule produce an instance on `date`?
    ///
    /// Ignores the active window and cancellations.
    #[must_use]
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.rule.occurs_on(date)
    }

    #[must_use]
    pub fn is_cancelled_on(&self, date: NaiveDate) -> bool {
        self.cancellations.contains(date)
    }

    /// ## Summary
    /// Does this event show up on `date`?
    ///
    /// The single predicate presentation layers must use: the rule produces
    /// an instance, the date is inside the active window, and the instance
    /// is not cancelled.
    #[must_use]
    pub fn scheduled_on(&self, date: NaiveDate) -> bool {
        self.occurs_on(date) && self.is_active_on(date) && !self.is_cancelled_on(date)
    }

    /// ## Summary
    /// The explicit dates in ascending order.
    ///
    /// Weekly events are described by their weekday, not by enumeration, so
    /// the sequence is empty for them; use [`EventSchedule::upcoming_dates`]
    /// for a bounded projection instead.
    #[must_use]
    pub fn ordered_dates(&self) -> Vec<NaiveDate> {
        match &self.rule {
            RecurrenceRule::Weekly { .. } => Vec::new(),
            RecurrenceRule::Occasional { dates } => dates.ascending(),
        }
    }

    /// ## Summary
    /// The latest explicit date, when that question applies.
    ///
    /// `None` both for a weekly rule (an unbounded recurrence has no latest
    /// date - not applicable rather than an error) and for an occasional
    /// rule whose date set is still empty.
    #[must_use]
    pub fn latest_known_date(&self) -> Option<NaiveDate> {
        match &self.rule {
            RecurrenceRule::Weekly { .. } => None,
            RecurrenceRule::Occasional { dates } => dates.max_date(),
        }
    }

    /// ## Summary
    /// Will this event still occur after `as_of`?
    ///
    /// An explicit `last_active` bound at or before `as_of` always wins.
    /// Otherwise weekly events are presumed to run forever, and occasional
    /// events need a known date after `as_of` - an empty date set projects
    /// nothing forward.
    #[must_use]
    pub fn has_future_occurrence(&self, as_of: NaiveDate) -> bool {
        if self.last_active.is_some_and(|last| last <= as_of) {
            return false;
        }
        match &self.rule {
            RecurrenceRule::Weekly { .. } => true,
            RecurrenceRule::Occasional { .. } => self
                .latest_known_date()
                .is_some_and(|latest| latest > as_of),
        }
    }

    /// ## Summary
    /// Up to `limit` dates on or after `from` on which the rule produces an
    /// instance inside the active window.
    ///
    /// The bounded projection for weekly events: walks forward from the
    /// later of `from` and `first_active` in 7-day steps. Cancelled dates
    /// are included - a cancellation annotates an occurrence, it does not
    /// punch a hole in the recurrence.
    #[must_use]
    pub fn upcoming_dates(&self, from: NaiveDate, limit: usize) -> Vec<NaiveDate> {
        let start = self.first_active.map_or(from, |first| first.max(from));
        match &self.rule {
            RecurrenceRule::Weekly { weekday, .. } => {
                let mut dates = Vec::new();
                let mut date = occurring_on_or_after(start, *weekday);
                while dates.len() < limit && self.is_active_on(date) {
                    dates.push(date);
                    let Some(next) = date.checked_add_days(Days::new(7)) else {
                        break;
                    };
                    date = next;
                }
                dates
            }
            RecurrenceRule::Occasional { dates } => dates
                .on_or_after(start)
                .ascending()
                .into_iter()
                .filter(|d| self.is_active_on(*d))
                .take(limit)
                .collect(),
        }
    }

    /// Cancellations on or after `today`, ascending.
    #[must_use]
    pub fn future_cancellations(&self, today: NaiveDate) -> Vec<NaiveDate> {
        self.cancellations.on_or_after(today).ascending()
    }

    /// Listed recently enough to still be flagged as new.
    #[must_use]
    pub fn is_new(&self, today: NaiveDate) -> bool {
        self.first_active
            .and_then(|first| first.checked_add_days(Days::new(CONSIDERED_NEW_FOR_DAYS)))
            .is_some_and(|cutoff| cutoff > today)
    }

    /// Has the first instance already happened?
    #[must_use]
    pub fn has_started(&self, today: NaiveDate) -> bool {
        self.first_active.is_some_and(|first| first < today)
    }

    /// Has the last instance already happened?
    ///
    /// This is the `Archived` state: a `last_active` bound in the past.
    #[must_use]
    pub fn has_ended(&self, today: NaiveDate) -> bool {
        self.last_active.is_some_and(|last| last < today)
    }

    /// ## Summary
    /// Takes the event out of rotation by assigning its natural end date.
    ///
    /// Only fireable while the schedule is still active; an event whose
    /// `last_active` is already in the past is already archived, and
    /// re-archiving it fails without mutating anything. A `last_active`
    /// still in the future is recomputed.
    ///
    /// The computed bound is assigned directly: the empty-occasional
    /// sentinel may legitimately precede `first_active`.
    ///
    /// ## Errors
    /// Returns `IllegalArchival` when the schedule has already ended.
    pub fn archive(&mut self, today: NaiveDate) -> EngineResult<NaiveDate> {
        if self.has_ended(today) {
            return Err(EngineError::IllegalArchival);
        }
        let ended = archive::archive_date(self, today);
        self.last_active = Some(ended);
        Ok(ended)
    }

    /// Adds an explicit date to an occasional schedule.
    ///
    /// ## Errors
    /// Returns `InvalidRecurrence` on a weekly schedule - weekly events
    /// carry no instance dates.
    pub fn add_date(&mut self, date: NaiveDate) -> EngineResult<()> {
        match &mut self.rule {
            RecurrenceRule::Weekly { .. } => Err(EngineError::InvalidRecurrence(
                "explicit dates must be empty for weekly events",
            )),
            RecurrenceRule::Occasional { dates } => {
                dates.insert(date);
                Ok(())
            }
        }
    }

    /// Removes an explicit date. Returns false if it was not present
    /// (always, for a weekly schedule).
    pub fn remove_date(&mut self, date: NaiveDate) -> bool {
        match &mut self.rule {
            RecurrenceRule::Weekly { .. } => false,
            RecurrenceRule::Occasional { dates } => dates.remove(date),
        }
    }

    pub fn add_cancellation(&mut self, date: NaiveDate) {
        self.cancellations.insert(date);
    }

    pub fn remove_cancellation(&mut self, date: NaiveDate) -> bool {
        self.cancellations.remove(date)
    }

    /// Replaces the first-active bound.
    ///
    /// ## Errors
    /// Returns `InvalidRecurrence` when the new window would be inverted.
    pub fn set_first_active(&mut self, first: Option<NaiveDate>) -> EngineResult<()> {
        check_window(first, self.last_active)?;
        self.first_active = first;
        Ok(())
    }

    /// Replaces the last-active bound.
    ///
    /// The reactivation escape hatch: clearing or moving the bound forward
    /// is a plain field edit for external collaborators, not a state
    /// transition this engine exposes.
    ///
    /// ## Errors
    /// Returns `InvalidRecurrence` when the new window would be inverted.
    pub fn set_last_active(&mut self, last: Option<NaiveDate>) -> EngineResult<()> {
        check_window(self.first_active, last)?;
        self.last_active = last;
        Ok(())
    }
}

fn check_window(first: Option<NaiveDate>, last: Option<NaiveDate>) -> EngineResult<()> {
    if let (Some(first), Some(last)) = (first, last) {
        if first > last {
            return Err(EngineError::InvalidRecurrence(
                "first active date is after last active date",
            ));
        }
    }
    Ok(())
}
