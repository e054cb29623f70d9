//! Civil-date utilities: weekday projection with no time-of-day component.

pub mod date_set;

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Number of days in a week, for weekday stepping.
const WEEK: u64 = 7;

/// ## Summary
/// Returns the most recent occurrence of `weekday` strictly before `today`.
///
/// When `today` itself falls on `weekday`, the result is a full week back -
/// "the previous Tuesday" never means today.
#[must_use]
pub fn previous_occurring(today: NaiveDate, weekday: Weekday) -> NaiveDate {
    let back = u64::from(
        (today.weekday().num_days_from_monday() + 7 - weekday.num_days_from_monday()) % 7,
    );
    let back = if back == 0 { WEEK } else { back };
    today - Days::new(back)
}

/// ## Summary
/// Returns the first occurrence of `weekday` strictly after `from`.
#[must_use]
pub fn next_occurring(from: NaiveDate, weekday: Weekday) -> NaiveDate {
    let forward = u64::from(
        (weekday.num_days_from_monday() + 7 - from.weekday().num_days_from_monday()) % 7,
    );
    let forward = if forward == 0 { WEEK } else { forward };
    from + Days::new(forward)
}

/// ## Summary
/// Returns the first occurrence of `weekday` on or after `from`.
///
/// Unlike [`next_occurring`], `from` itself is a valid answer.
#[must_use]
pub fn occurring_on_or_after(from: NaiveDate, weekday: Weekday) -> NaiveDate {
    let forward = u64::from(
        (weekday.num_days_from_monday() + 7 - from.weekday().num_days_from_monday()) % 7,
    );
    from + Days::new(forward)
}
