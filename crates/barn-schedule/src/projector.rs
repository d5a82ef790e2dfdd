//! Due-date projector.
//!
//! Month and year offsets use calendar arithmetic: when the target month is
//! shorter than the source day, the result clamps to the last day of the
//! target month (Jan 31 + 1 month = Feb 28/29, Feb 29 + 1 year = Feb 28).
//! Results past the representable range saturate to `DateTime::<Utc>::MAX_UTC`
//! in [`suggest_next_due`] and surface as `CalendarOverflow` in
//! [`try_suggest_next_due`].

use chrono::{DateTime, Duration, Months, Utc};
use tracing::warn;

use barn_core::errors::ScheduleError;
use barn_core::policy::{self, CalendarUnit, RecurrenceOffset};
use barn_core::EventCategory;

/// Add a calendar offset to a timestamp. `None` when the result is out of range.
pub fn apply_offset(offset: RecurrenceOffset, from: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let amount = offset.amount;
    match offset.unit {
        CalendarUnit::Day => Duration::try_days(i64::from(amount))
            .and_then(|delta| from.checked_add_signed(delta)),
        CalendarUnit::Week => Duration::try_weeks(i64::from(amount))
            .and_then(|delta| from.checked_add_signed(delta)),
        CalendarUnit::Month => from.checked_add_months(Months::new(amount)),
        CalendarUnit::Year => amount
            .checked_mul(12)
            .and_then(|months| from.checked_add_months(Months::new(months))),
    }
}

/// Suggested next-due date, or `CalendarOverflow` when it cannot be represented.
pub fn try_suggest_next_due(
    category: EventCategory,
    occurred_on: DateTime<Utc>,
) -> Result<DateTime<Utc>, ScheduleError> {
    let offset = policy::default_offset(category);
    apply_offset(offset, occurred_on).ok_or(ScheduleError::CalendarOverflow {
        category,
        offset,
        occurred_on,
    })
}

/// Suggested next-due date. Saturates to the latest representable instant on overflow.
pub fn suggest_next_due(category: EventCategory, occurred_on: DateTime<Utc>) -> DateTime<Utc> {
    try_suggest_next_due(category, occurred_on).unwrap_or_else(|err| {
        warn!(error = %err, "next-due projection saturated");
        DateTime::<Utc>::MAX_UTC
    })
}
