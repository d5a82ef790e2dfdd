use std::fmt;

use serde::{Deserialize, Serialize};

use super::ComplianceReport;
use crate::entity::Cost;

/// Signal that produced an insight, in generation priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    OverdueSummary,
    FarrierCycle,
    DewormingStale,
    CostConcentration,
    KeepLogging,
}

/// A human-readable insight string tagged with its source signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub message: String,
}

impl Insight {
    pub fn new(kind: InsightKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Everything derived for one entity at one reference time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityAnalysis {
    pub entity_id: String,
    pub compliance: ComplianceReport,
    pub insights: Vec<Insight>,
    pub overdue_count: usize,
    pub projected_annual_cost: Cost,
}

impl EntityAnalysis {
    /// Insight messages in priority order.
    pub fn insight_messages(&self) -> Vec<&str> {
        self.insights.iter().map(|i| i.message.as_str()).collect()
    }
}
