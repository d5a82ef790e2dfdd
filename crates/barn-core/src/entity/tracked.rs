use serde::{Deserialize, Serialize};

use super::{Cost, EventCategory, ScheduledEvent};

/// A horse (or any other subject) whose maintenance schedule is tracked.
///
/// Owned by the persistence collaborator; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedEntity {
    pub id: String,
    pub name: String,
    /// Clipped or shorn coat. Only the blanket classifier reads this.
    #[serde(default)]
    pub is_clipped: bool,
    #[serde(default)]
    pub events: Vec<ScheduledEvent>,
}

impl TrackedEntity {
    /// Create an unclipped entity with a fresh id and no events.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            is_clipped: false,
            events: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_clipped(mut self, is_clipped: bool) -> Self {
        self.is_clipped = is_clipped;
        self
    }

    pub fn with_event(mut self, event: ScheduledEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Events of one category, in stored order.
    pub fn events_of(&self, category: EventCategory) -> impl Iterator<Item = &ScheduledEvent> {
        self.events.iter().filter(move |e| e.category == category)
    }

    /// Sum of every recorded cost.
    pub fn total_cost(&self) -> Cost {
        self.events.iter().map(ScheduledEvent::cost_or_zero).sum()
    }
}
