//! End-to-end listing window: occasional events surface exactly on their
//! explicit dates within the fortnight view.

use chrono::{Days, NaiveDate};
use shindig_core::types::EventKind;
use shindig_engine::index::{by_title, windowed_occurrences};
use shindig_engine::{EventSchedule, RecurrenceRule};
use uuid::Uuid;

fn occasional(title: &str, dates: &[NaiveDate]) -> EventSchedule {
    EventSchedule::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        title,
        EventKind::Social,
        RecurrenceRule::occasional(dates.iter().copied().collect()),
    )
}

#[test_log::test]
fn fortnight_view_lists_occasional_events_on_their_dates_only() {
    let day = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date");
    let plus = |n: u64| day + Days::new(n);

    let schedules = vec![
        occasional("Tomorrow Night Hop", &[plus(1)]),
        occasional("Second Week Stomp", &[plus(8), plus(11)]),
    ];

    let window = windowed_occurrences(day, 14, &schedules, by_title).expect("valid window");

    assert_eq!(window.len(), 14);
    for (date, occurrences) in &window {
        let expected = [plus(1), plus(8), plus(11)].contains(date);
        assert_eq!(
            !occurrences.is_empty(),
            expected,
            "unexpected listing on {date}"
        );
    }

    assert_eq!(window[&plus(1)][0].schedule.title(), "Tomorrow Night Hop");
    assert_eq!(window[&plus(8)][0].schedule.title(), "Second Week Stomp");
    assert_eq!(window[&plus(11)][0].schedule.title(), "Second Week Stomp");
}

#[test_log::test]
fn fortnight_view_mixes_weekly_and_occasional() {
    let day = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date");
    let plus = |n: u64| day + Days::new(n);

    let weekly = EventSchedule::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        "Thursday Swing",
        EventKind::Social,
        RecurrenceRule::weekly(chrono::Weekday::Thu),
    );
    let schedules = vec![weekly, occasional("One Off", &[plus(5)])];

    let window = windowed_occurrences(day, 14, &schedules, by_title).expect("valid window");

    // Thursdays in the window: Jan 6 and Jan 13.
    assert_eq!(window[&plus(5)].len(), 2);
    assert_eq!(window[&plus(12)].len(), 1);
    assert_eq!(window[&plus(12)][0].schedule.title(), "Thursday Swing");
}
