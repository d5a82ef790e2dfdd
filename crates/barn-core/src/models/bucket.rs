use serde::{Deserialize, Serialize};

use crate::entity::ScheduledEvent;

/// Time-relative status bucket, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketKind {
    Overdue,
    ThisWeek,
    ThisMonth,
    Upcoming,
}

impl BucketKind {
    /// All buckets in display order.
    pub const ALL: [BucketKind; 4] = [
        Self::Overdue,
        Self::ThisWeek,
        Self::ThisMonth,
        Self::Upcoming,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overdue => "Overdue",
            Self::ThisWeek => "This Week",
            Self::ThisMonth => "This Month",
            Self::Upcoming => "Upcoming",
        }
    }

    pub fn is_overdue(self) -> bool {
        matches!(self, Self::Overdue)
    }
}

/// A due event paired with the id and name of the entity that owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketEntry {
    pub entity_id: String,
    pub entity_name: String,
    pub event: ScheduledEvent,
}

/// Derived grouping of due events. Built fresh per query, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceBucket {
    pub kind: BucketKind,
    pub label: String,
    pub is_overdue: bool,
    pub entries: Vec<BucketEntry>,
}

impl MaintenanceBucket {
    pub fn new(kind: BucketKind) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            is_overdue: kind.is_overdue(),
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
