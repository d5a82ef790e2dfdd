//! Per-entity schedule views.

use chrono::{DateTime, Utc};

use barn_core::{EventCategory, ScheduledEvent, TrackedEntity};

/// For each category in declaration order, the due date carried by the most
/// recently occurred event of that category.
///
/// `None` when the entity has no event of the category or the latest one has
/// no due date. Equal occurrence dates resolve to the later stored event.
pub fn next_due_by_category(entity: &TrackedEntity) -> Vec<(EventCategory, Option<DateTime<Utc>>)> {
    EventCategory::ALL
        .into_iter()
        .map(|category| {
            let latest = entity.events_of(category).max_by_key(|e| e.occurred_on);
            (category, latest.and_then(|e| e.next_due_on))
        })
        .collect()
}

/// Events whose due date is strictly before `now`, in stored order.
pub fn overdue_events(entity: &TrackedEntity, now: DateTime<Utc>) -> Vec<&ScheduledEvent> {
    entity.events.iter().filter(|e| e.is_overdue(now)).collect()
}
