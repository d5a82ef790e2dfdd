/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Width of the "This Week" bucket, in days after the reference time.
pub const THIS_WEEK_DAYS: u32 = 7;

/// Width of the "This Month" bucket, in calendar months after the reference time.
pub const THIS_MONTH_MONTHS: u32 = 1;

/// Days since the last deworming after which the staleness insight fires.
pub const DEWORMING_STALE_DAYS: i64 = 70;

/// Trailing window (calendar months) summed for the projected annual cost.
pub const PROJECTION_WINDOW_MONTHS: u32 = 6;

/// Multiplier that annualizes the trailing-window spend.
pub const PROJECTION_ANNUALIZE_FACTOR: f64 = 2.0;

/// Minimum number of same-category events needed to measure an interval.
pub const MIN_EVENTS_FOR_INTERVAL: usize = 2;
