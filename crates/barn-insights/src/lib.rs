//! # barn-insights
//!
//! Derived analytics over an entity's event history.
//!
//! ## Insight priority
//!
//! | Slot | Signal | Fires when |
//! |------|--------|------------|
//! | 1 | Overdue summary | any event is past due |
//! | 2 | Farrier cycle | ≥2 farrier visits |
//! | 3 | Deworming staleness | ≥2 dewormings and the last is >70 days old |
//! | 4 | Cost concentration | any cost recorded |
//! | – | Keep logging | none of the above fired |
//!
//! Compliance averages truncate to whole days.

pub mod compliance;
pub mod costs;
pub mod engine;
pub mod insights;
pub mod projection;

pub use compliance::{category_compliance, compliance_report, intervals_days};
pub use costs::{summarize_costs, CategoryCost, CostSummary, EntityCost, MonthlySpend};
pub use engine::InsightEngine;
pub use projection::projected_annual_cost;
