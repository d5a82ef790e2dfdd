use chrono::{DateTime, Utc};

use crate::entity::{EventCategory, TrackedEntity};
use crate::models::MaintenanceBucket;

/// Due-date projection and time-relative grouping.
pub trait IMaintenanceScheduler: Send + Sync {
    /// Suggested next-due date for an occurrence. Never panics.
    fn suggest_next_due(&self, category: EventCategory, occurred_on: DateTime<Utc>)
        -> DateTime<Utc>;

    /// Group every due event into non-empty status buckets relative to `now`.
    fn bucketize(
        &self,
        entities: &[TrackedEntity],
        now: DateTime<Utc>,
        category_filter: Option<EventCategory>,
    ) -> Vec<MaintenanceBucket>;
}
