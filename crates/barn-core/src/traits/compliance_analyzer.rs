use chrono::{DateTime, Utc};

use crate::entity::TrackedEntity;
use crate::models::EntityAnalysis;

/// Compliance scoring and insight generation for one entity.
pub trait IComplianceAnalyzer: Send + Sync {
    fn analyze(&self, entity: &TrackedEntity, now: DateTime<Utc>) -> EntityAnalysis;
}
