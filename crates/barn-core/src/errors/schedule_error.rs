use chrono::{DateTime, Utc};

use crate::entity::EventCategory;
use crate::policy::RecurrenceOffset;

/// Due-date arithmetic errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("calendar overflow adding {offset} to {occurred_on} for {category}")]
    CalendarOverflow {
        category: EventCategory,
        offset: RecurrenceOffset,
        occurred_on: DateTime<Utc>,
    },
}
