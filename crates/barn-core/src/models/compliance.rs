use serde::{Deserialize, Serialize};

use crate::entity::EventCategory;

/// Outcome of measuring one category's realized visit intervals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ComplianceStatus {
    /// Fewer than two events: no interval can be measured.
    InsufficientData { events: usize },
    Measured {
        /// Whole-day gaps between consecutive occurrences, oldest first.
        intervals_days: Vec<i64>,
        /// Truncated integer mean of `intervals_days`.
        average_days: i64,
        threshold_days: i64,
        compliant: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCompliance {
    pub category: EventCategory,
    pub status: ComplianceStatus,
}

impl CategoryCompliance {
    /// `None` when there is not enough data to judge.
    pub fn is_compliant(&self) -> Option<bool> {
        match self.status {
            ComplianceStatus::Measured { compliant, .. } => Some(compliant),
            ComplianceStatus::InsufficientData { .. } => None,
        }
    }

    pub fn average_days(&self) -> Option<i64> {
        match self.status {
            ComplianceStatus::Measured { average_days, .. } => Some(average_days),
            ComplianceStatus::InsufficientData { .. } => None,
        }
    }
}

/// Per-category compliance for one entity, in category declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub entity_id: String,
    pub categories: Vec<CategoryCompliance>,
}

impl ComplianceReport {
    pub fn get(&self, category: EventCategory) -> Option<&CategoryCompliance> {
        self.categories.iter().find(|c| c.category == category)
    }
}
