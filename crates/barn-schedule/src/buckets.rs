//! Maintenance bucketizer.
//!
//! Buckets, first match wins:
//! - Overdue: `due < now`
//! - This Week: `now <= due <= now + 7 days`
//! - This Month: `now + 7 days < due <= now + 1 calendar month`
//! - Upcoming: everything later
//!
//! Events without a due date are not schedulable and never appear.

use chrono::{DateTime, Utc};
use tracing::debug;

use barn_core::constants::{THIS_MONTH_MONTHS, THIS_WEEK_DAYS};
use barn_core::models::{BucketEntry, BucketKind, MaintenanceBucket};
use barn_core::policy::{CalendarUnit, RecurrenceOffset};
use barn_core::{EventCategory, TrackedEntity};
use barn_observability::schedule_span;

use crate::projector::apply_offset;

/// Bucket edges resolved once per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketHorizons {
    pub now: DateTime<Utc>,
    /// Last instant (inclusive) of "This Week".
    pub week_end: DateTime<Utc>,
    /// Last instant (inclusive) of "This Month".
    pub month_end: DateTime<Utc>,
}

impl BucketHorizons {
    pub fn new(now: DateTime<Utc>) -> Self {
        let week = RecurrenceOffset::new(CalendarUnit::Day, THIS_WEEK_DAYS);
        let month = RecurrenceOffset::new(CalendarUnit::Month, THIS_MONTH_MONTHS);
        let week_end = apply_offset(week, now).unwrap_or(DateTime::<Utc>::MAX_UTC);
        let month_end = apply_offset(month, now)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
            .max(week_end);
        Self {
            now,
            week_end,
            month_end,
        }
    }

    pub fn classify(&self, due: DateTime<Utc>) -> BucketKind {
        if due < self.now {
            BucketKind::Overdue
        } else if due <= self.week_end {
            BucketKind::ThisWeek
        } else if due <= self.month_end {
            BucketKind::ThisMonth
        } else {
            BucketKind::Upcoming
        }
    }
}

/// Flatten every event that has a due date, carrying its owner's id and name.
/// Input order is preserved.
pub fn due_entries(
    entities: &[TrackedEntity],
    category_filter: Option<EventCategory>,
) -> Vec<(DateTime<Utc>, BucketEntry)> {
    entities
        .iter()
        .flat_map(|entity| {
            entity.events.iter().filter_map(move |event| {
                let due = event.next_due_on?;
                if category_filter.is_some_and(|c| c != event.category) {
                    return None;
                }
                Some((
                    due,
                    BucketEntry {
                        entity_id: entity.id.clone(),
                        entity_name: entity.name.clone(),
                        event: event.clone(),
                    },
                ))
            })
        })
        .collect()
}

/// Group due events into non-empty buckets, in Overdue → Upcoming order.
///
/// Within a bucket entries are ascending by due date; equal due dates keep
/// input order.
pub fn bucketize(
    entities: &[TrackedEntity],
    now: DateTime<Utc>,
    category_filter: Option<EventCategory>,
) -> Vec<MaintenanceBucket> {
    let _span = schedule_span!(entities.len(), category_filter).entered();

    let mut due = due_entries(entities, category_filter);
    // Stable sort: ties stay in input order.
    due.sort_by_key(|(due_on, _)| *due_on);

    let horizons = BucketHorizons::new(now);
    let mut buckets: Vec<MaintenanceBucket> =
        BucketKind::ALL.into_iter().map(MaintenanceBucket::new).collect();

    for (due_on, entry) in due {
        let kind = horizons.classify(due_on);
        if let Some(bucket) = buckets.iter_mut().find(|b| b.kind == kind) {
            bucket.entries.push(entry);
        }
    }

    buckets.retain(|b| !b.is_empty());

    debug!(
        buckets = buckets.len(),
        overdue = buckets.iter().find(|b| b.is_overdue).map_or(0, MaintenanceBucket::len),
        "bucketized maintenance events"
    );

    buckets
}
