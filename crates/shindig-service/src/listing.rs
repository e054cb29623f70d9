//! Listing queries: what's on, for which dates, at which venues.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{NaiveDate, Weekday};
use shindig_core::config::Settings;
use shindig_core::types::EventKind;
use shindig_engine::index::{by_title, occurrences_on, windowed_occurrences, Occurrence};
use shindig_engine::schedule::recurrence::RecurrenceRule;
use shindig_engine::EventSchedule;
use shindig_store::repository::EventStore;
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};

/// One listed occurrence, owned, ready to hand across the boundary.
///
/// Still presentation-free: identifiers and flags, no formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub date: NaiveDate,
    pub event_id: Uuid,
    pub venue_id: Uuid,
    pub title: String,
    pub kind: EventKind,
    pub cancelled: bool,
}

impl Listing {
    fn from_occurrence(occurrence: &Occurrence<'_>) -> Self {
        Self {
            date: occurrence.date,
            event_id: occurrence.schedule.id(),
            venue_id: occurrence.schedule.venue_id(),
            title: occurrence.schedule.title().to_string(),
            kind: occurrence.schedule.kind(),
            cancelled: occurrence.cancelled,
        }
    }
}

/// Listing service over the event store.
pub struct ListingService {
    store: Arc<dyn EventStore>,
    settings: Settings,
}

impl ListingService {
    #[must_use]
    pub fn new(store: Arc<dyn EventStore>, settings: Settings) -> Self {
        Self { store, settings }
    }

    /// ## Summary
    /// Everything on in the `day_count` days starting at `from`, keyed by
    /// date and ordered by title within each date.
    ///
    /// The engine accepts any non-negative window; the directory's cap
    /// (`listing.max_window_days`, 14 by default) is enforced here.
    ///
    /// ## Errors
    /// `WindowTooLong` above the cap, `InvalidRange` below zero, or any
    /// store/mapping failure.
    pub async fn whats_on(
        &self,
        from: NaiveDate,
        day_count: i64,
    ) -> ServiceResult<BTreeMap<NaiveDate, Vec<Listing>>> {
        let max = self.settings.listing.max_window_days;
        if day_count > max {
            return Err(ServiceError::WindowTooLong {
                requested: day_count,
                max,
            });
        }

        let schedules = self.load_schedules().await?;
        let window = windowed_occurrences(from, day_count, &schedules, by_title)?;

        tracing::debug!(
            from = %from,
            day_count,
            event_count = schedules.len(),
            "Resolved listing window"
        );

        Ok(window
            .into_iter()
            .map(|(date, occurrences)| {
                (date, occurrences.iter().map(Listing::from_occurrence).collect())
            })
            .collect())
    }

    /// Social events on `date`, cancelled ones included and flagged.
    ///
    /// ## Errors
    /// Any store or mapping failure.
    pub async fn socials_on(&self, date: NaiveDate) -> ServiceResult<Vec<Listing>> {
        let schedules = self.load_schedules().await?;
        Ok(social_listings(date, &schedules, None))
    }

    /// Social events on `date` at one venue.
    ///
    /// ## Errors
    /// Any store or mapping failure.
    pub async fn socials_on_at_venue(
        &self,
        date: NaiveDate,
        venue_id: Uuid,
    ) -> ServiceResult<Vec<Listing>> {
        let schedules = self.load_schedules().await?;
        Ok(social_listings(date, &schedules, Some(venue_id)))
    }

    /// ## Summary
    /// Class events listed for a weekday: still running as of `today`,
    /// weekly or fortnightly, recurring on `day`. Ordered by title.
    ///
    /// Occasional events never appear here - the class listing is a
    /// weekday grid, not a calendar.
    ///
    /// ## Errors
    /// Any store or mapping failure.
    pub async fn classes_on_day(
        &self,
        day: Weekday,
        today: NaiveDate,
    ) -> ServiceResult<Vec<EventSchedule>> {
        let schedules = self.load_schedules().await?;
        let mut classes: Vec<EventSchedule> = schedules
            .into_iter()
            .filter(|schedule| {
                schedule.kind().has_class()
                    && schedule.last_active().is_none_or(|last| last > today)
                    && matches!(
                        schedule.rule(),
                        RecurrenceRule::Weekly { weekday, interval_weeks }
                            if *weekday == day && *interval_weeks <= 2
                    )
            })
            .collect();
        classes.sort_by(|a, b| by_title(a, b).then_with(|| a.id().cmp(&b.id())));
        Ok(classes)
    }

    async fn load_schedules(&self) -> ServiceResult<Vec<EventSchedule>> {
        let rows = self.store.fetch_all().await?;
        rows.iter()
            .map(|row| shindig_store::map::schedule_from_row(row).map_err(ServiceError::from))
            .collect()
    }
}

fn social_listings(
    date: NaiveDate,
    schedules: &[EventSchedule],
    venue_id: Option<Uuid>,
) -> Vec<Listing> {
    occurrences_on(date, schedules, by_title)
        .iter()
        .filter(|occurrence| occurrence.schedule.kind().has_social())
        .filter(|occurrence| {
            venue_id.is_none_or(|venue| occurrence.schedule.venue_id() == venue)
        })
        .map(Listing::from_occurrence)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shindig_store::memory::MemoryEventStore;
    use shindig_store::row::EventRow;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn social_row(title: &str, dates: &[NaiveDate]) -> EventRow {
        EventRow {
            id: Uuid::new_v4(),
            venue_id: Uuid::new_v4(),
            title: title.to_string(),
            has_class: false,
            has_social: true,
            frequency: 0,
            weekday: None,
            first_active: None,
            last_active: None,
            dates: dates.to_vec(),
            cancellations: Vec::new(),
        }
    }

    fn weekly_class_row(title: &str, weekday: &str, frequency: u16) -> EventRow {
        EventRow {
            id: Uuid::new_v4(),
            venue_id: Uuid::new_v4(),
            title: title.to_string(),
            has_class: true,
            has_social: false,
            frequency,
            weekday: Some(weekday.to_string()),
            first_active: None,
            last_active: None,
            dates: Vec::new(),
            cancellations: Vec::new(),
        }
    }

    fn service(rows: Vec<EventRow>) -> ListingService {
        ListingService::new(
            Arc::new(MemoryEventStore::with_rows(rows)),
            Settings::default(),
        )
    }

    #[test_log::test(tokio::test)]
    async fn test_whats_on_respects_the_window_cap() {
        let listing = service(vec![]);

        let result = listing.whats_on(date(2000, 1, 1), 15).await;

        assert!(matches!(
            result,
            Err(ServiceError::WindowTooLong {
                requested: 15,
                max: 14
            })
        ));
    }

    #[test_log::test(tokio::test)]
    async fn test_whats_on_rejects_negative_windows() {
        let listing = service(vec![]);

        let result = listing.whats_on(date(2000, 1, 1), -1).await;

        assert!(matches!(
            result,
            Err(ServiceError::EngineError(
                shindig_engine::EngineError::InvalidRange { days: -1 }
            ))
        ));
    }

    #[test_log::test(tokio::test)]
    async fn test_whats_on_orders_by_title_within_a_date() {
        let night = date(2000, 1, 7);
        let listing = service(vec![
            social_row("Zelda's Ball", &[night]),
            social_row("Attic Social", &[night]),
        ]);

        let window = listing
            .whats_on(date(2000, 1, 1), 14)
            .await
            .expect("valid window");

        let titles: Vec<&str> = window[&night].iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Attic Social", "Zelda's Ball"]);
    }

    #[test_log::test(tokio::test)]
    async fn test_socials_on_returns_socials_for_the_date() {
        let night = date(2000, 1, 7);
        let mut cancelled = social_row("Called Off", &[night]);
        cancelled.cancellations = vec![night];
        let listing = service(vec![
            social_row("Running Fine", &[night]),
            cancelled,
            social_row("Other Night", &[date(2000, 1, 8)]),
            weekly_class_row("Class Only", "Friday", 1),
        ]);

        let socials = listing.socials_on(night).await.expect("socials resolve");

        // 2000-01-07 was a Friday, but the Friday event is a class, not a social.
        let flags: Vec<(&str, bool)> = socials
            .iter()
            .map(|l| (l.title.as_str(), l.cancelled))
            .collect();
        assert_eq!(
            flags,
            vec![("Called Off", true), ("Running Fine", false)]
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_socials_on_at_venue_filters_by_venue() {
        let night = date(2000, 1, 7);
        let here = social_row("Here", &[night]);
        let venue_id = here.venue_id;
        let listing = service(vec![here, social_row("Elsewhere", &[night])]);

        let socials = listing
            .socials_on_at_venue(night, venue_id)
            .await
            .expect("socials resolve");

        assert_eq!(socials.len(), 1);
        assert_eq!(socials[0].title, "Here");
    }

    #[test_log::test(tokio::test)]
    async fn test_classes_on_day_lists_weekly_and_fortnightly_only() {
        let today = date(2000, 1, 1);
        let mut ended = weekly_class_row("Ended Class", "Tuesday", 1);
        ended.last_active = Some(date(1999, 6, 1));
        let listing = service(vec![
            weekly_class_row("Beginner Balboa", "Tuesday", 1),
            weekly_class_row("Fortnightly Footwork", "Tuesday", 2),
            weekly_class_row("Monthly Masterclass", "Tuesday", 4),
            weekly_class_row("Wrong Day", "Wednesday", 1),
            ended,
        ]);

        let classes = listing
            .classes_on_day(Weekday::Tue, today)
            .await
            .expect("classes resolve");

        let titles: Vec<&str> = classes.iter().map(EventSchedule::title).collect();
        assert_eq!(titles, vec!["Beginner Balboa", "Fortnightly Footwork"]);
    }

    #[test_log::test(tokio::test)]
    async fn test_malformed_row_fails_the_query() {
        let mut bad = weekly_class_row("No Weekday", "Tuesday", 1);
        bad.weekday = None;
        let listing = service(vec![bad]);

        let result = listing.whats_on(date(2000, 1, 1), 7).await;

        assert!(matches!(
            result,
            Err(ServiceError::StoreError(
                shindig_store::StoreError::MalformedRow { .. }
            ))
        ));
    }
}
