//! Cycle policy table: default recurrence and compliance threshold per category.
//!
//! | Category | Default next-due offset | Max acceptable average interval |
//! |----------|-------------------------|---------------------------------|
//! | Farrier | +7 weeks | 56 days |
//! | Vet | +6 months | 200 days |
//! | Deworming | +2 months | 70 days |
//! | Dental | +1 year | 395 days |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::EventCategory;

/// Calendar unit used by a recurrence offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarUnit {
    Day,
    Week,
    Month,
    Year,
}

impl CalendarUnit {
    fn name(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

/// A calendar-aware offset such as "+7 weeks" or "+1 year".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecurrenceOffset {
    pub unit: CalendarUnit,
    pub amount: u32,
}

impl RecurrenceOffset {
    pub const fn new(unit: CalendarUnit, amount: u32) -> Self {
        Self { unit, amount }
    }
}

impl fmt::Display for RecurrenceOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.amount == 1 { "" } else { "s" };
        write!(f, "+{} {}{}", self.amount, self.unit.name(), plural)
    }
}

/// Fixed business rule for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclePolicy {
    /// Offset added to an occurrence date to suggest the next due date.
    pub offset: RecurrenceOffset,
    /// Average realized interval at or under which the category is compliant.
    pub compliance_threshold_days: i64,
}

impl CyclePolicy {
    /// Policy for a category. Exhaustive over the closed category set.
    pub const fn for_category(category: EventCategory) -> Self {
        match category {
            EventCategory::Farrier => Self {
                offset: RecurrenceOffset::new(CalendarUnit::Week, 7),
                compliance_threshold_days: 56,
            },
            EventCategory::Vet => Self {
                offset: RecurrenceOffset::new(CalendarUnit::Month, 6),
                compliance_threshold_days: 200,
            },
            EventCategory::Deworming => Self {
                offset: RecurrenceOffset::new(CalendarUnit::Month, 2),
                compliance_threshold_days: 70,
            },
            EventCategory::Dental => Self {
                offset: RecurrenceOffset::new(CalendarUnit::Year, 1),
                compliance_threshold_days: 395,
            },
        }
    }
}

/// Default next-due offset for a category.
pub const fn default_offset(category: EventCategory) -> RecurrenceOffset {
    CyclePolicy::for_category(category).offset
}

/// Compliance threshold (days) for a category.
pub const fn compliance_threshold_days(category: EventCategory) -> i64 {
    CyclePolicy::for_category(category).compliance_threshold_days
}
