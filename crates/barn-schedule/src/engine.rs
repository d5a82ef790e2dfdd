use chrono::{DateTime, Utc};

use barn_core::errors::BarnResult;
use barn_core::models::MaintenanceBucket;
use barn_core::traits::IMaintenanceScheduler;
use barn_core::{EventCategory, ScheduledEvent, TrackedEntity};

use crate::completion::{self, Completion};
use crate::{buckets, projector};

/// Schedule engine: due-date projection, bucketing, and occurrence completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleEngine;

impl ScheduleEngine {
    pub fn new() -> Self {
        Self
    }

    /// Projection that reports calendar overflow instead of saturating.
    pub fn try_suggest_next_due(
        &self,
        category: EventCategory,
        occurred_on: DateTime<Utc>,
    ) -> BarnResult<DateTime<Utc>> {
        Ok(projector::try_suggest_next_due(category, occurred_on)?)
    }

    /// Resolve a completed occurrence and project its follow-up.
    pub fn complete(&self, event: &ScheduledEvent, occurred_on: DateTime<Utc>) -> Completion {
        completion::complete_event(event, occurred_on)
    }
}

impl IMaintenanceScheduler for ScheduleEngine {
    fn suggest_next_due(
        &self,
        category: EventCategory,
        occurred_on: DateTime<Utc>,
    ) -> DateTime<Utc> {
        projector::suggest_next_due(category, occurred_on)
    }

    fn bucketize(
        &self,
        entities: &[TrackedEntity],
        now: DateTime<Utc>,
        category_filter: Option<EventCategory>,
    ) -> Vec<MaintenanceBucket> {
        buckets::bucketize(entities, now, category_filter)
    }
}
