use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Cost, EventCategory};

/// One occurrence of a recurring maintenance category.
///
/// The owning entity is not referenced from here. Code that flattens events
/// across entities carries the owner's id next to the event instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub id: String,
    pub category: EventCategory,
    /// When the event actually happened.
    pub occurred_on: DateTime<Utc>,
    /// Projected or manually overridden next occurrence. Not guaranteed to
    /// be after `occurred_on`.
    #[serde(default)]
    pub next_due_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cost: Option<Cost>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub provider_name: Option<String>,
}

impl ScheduledEvent {
    /// Create an event with a fresh id and no due date, cost, or free text.
    pub fn new(category: EventCategory, occurred_on: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            category,
            occurred_on,
            next_due_on: None,
            cost: None,
            notes: None,
            provider_name: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_next_due(mut self, next_due_on: DateTime<Utc>) -> Self {
        self.next_due_on = Some(next_due_on);
        self
    }

    pub fn with_cost(mut self, amount: f64) -> Self {
        self.cost = Some(Cost::new(amount));
        self
    }

    pub fn with_provider(mut self, provider_name: impl Into<String>) -> Self {
        self.provider_name = Some(provider_name.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// True when a due date exists and lies strictly before `now`.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.next_due_on.is_some_and(|due| due < now)
    }

    /// Recorded cost, or zero when none was recorded.
    pub fn cost_or_zero(&self) -> Cost {
        self.cost.unwrap_or(Cost::ZERO)
    }
}
