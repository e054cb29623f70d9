/// Number of days the public listing looks ahead, including the start day.
pub const LISTING_WINDOW_DAYS: i64 = 14;

/// How long after its first date an event is still flagged as "new".
pub const CONSIDERED_NEW_FOR_DAYS: u64 = 30;
