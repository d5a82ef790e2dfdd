use chrono::{DateTime, Utc};
use tracing::debug;

use barn_core::ScheduledEvent;

use crate::projector::suggest_next_due;

/// Result of recording an occurrence. Both events are for the caller to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    /// The completed event with its due date cleared, so it no longer buckets or counts as overdue.
    pub resolved: ScheduledEvent,
    /// Fresh event for the visit that just happened, carrying the projected due date.
    pub follow_up: ScheduledEvent,
}

/// Record that `event`'s maintenance happened on `occurred_on`.
///
/// The follow-up gets a fresh id, the same category and provider, a due date
/// projected from the cycle policy, and no cost or notes. The resolved copy of
/// `event` keeps everything except `next_due_on`. `event` itself is not mutated.
pub fn complete_event(event: &ScheduledEvent, occurred_on: DateTime<Utc>) -> Completion {
    let mut follow_up = ScheduledEvent::new(event.category, occurred_on)
        .with_next_due(suggest_next_due(event.category, occurred_on));
    follow_up.provider_name = event.provider_name.clone();

    let resolved = ScheduledEvent {
        next_due_on: None,
        ..event.clone()
    };

    debug!(
        previous = %resolved.id,
        next = %follow_up.id,
        category = %event.category,
        "recorded occurrence"
    );
    Completion {
        resolved,
        follow_up,
    }
}
