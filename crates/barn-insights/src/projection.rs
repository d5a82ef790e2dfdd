use chrono::{DateTime, Months, Utc};

use barn_core::constants::{PROJECTION_ANNUALIZE_FACTOR, PROJECTION_WINDOW_MONTHS};
use barn_core::{Cost, ScheduledEvent};

/// Naive annual spend estimate: costs recorded in the trailing six calendar
/// months (inclusive of both ends), doubled. No weighting or seasonality.
pub fn projected_annual_cost<'a, I>(events: I, now: DateTime<Utc>) -> Cost
where
    I: IntoIterator<Item = &'a ScheduledEvent>,
{
    let window_start = now
        .checked_sub_months(Months::new(PROJECTION_WINDOW_MONTHS))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);

    let recent: Cost = events
        .into_iter()
        .filter(|e| e.occurred_on >= window_start && e.occurred_on <= now)
        .map(ScheduledEvent::cost_or_zero)
        .sum();

    recent * PROJECTION_ANNUALIZE_FACTOR
}
