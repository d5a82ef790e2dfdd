//! Prioritized insight generation.
//!
//! Each signal contributes at most one insight, in a fixed order. The
//! fallback only appears when every other slot stayed empty.

use chrono::{DateTime, Utc};

use barn_core::constants::{DEWORMING_STALE_DAYS, MIN_EVENTS_FOR_INTERVAL};
use barn_core::models::{ComplianceReport, ComplianceStatus, Insight, InsightKind};
use barn_core::{Cost, EventCategory, TrackedEntity};

pub const KEEP_LOGGING: &str = "Keep logging care events to unlock insights";

/// Build the insight list for one entity.
pub fn generate(
    entity: &TrackedEntity,
    report: &ComplianceReport,
    overdue_count: usize,
    now: DateTime<Utc>,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    if let Some(insight) = overdue_summary(overdue_count) {
        insights.push(insight);
    }
    if let Some(insight) = farrier_cycle(report) {
        insights.push(insight);
    }
    if let Some(insight) = deworming_staleness(entity, now) {
        insights.push(insight);
    }
    if let Some(insight) = cost_concentration(entity) {
        insights.push(insight);
    }

    if insights.is_empty() {
        insights.push(Insight::new(InsightKind::KeepLogging, KEEP_LOGGING));
    }
    insights
}

fn overdue_summary(overdue_count: usize) -> Option<Insight> {
    if overdue_count == 0 {
        return None;
    }
    let noun = if overdue_count == 1 { "item" } else { "items" };
    Some(Insight::new(
        InsightKind::OverdueSummary,
        format!("{overdue_count} overdue maintenance {noun}"),
    ))
}

fn farrier_cycle(report: &ComplianceReport) -> Option<Insight> {
    let farrier = report.get(EventCategory::Farrier)?;
    let ComplianceStatus::Measured {
        average_days,
        threshold_days,
        compliant,
        ..
    } = farrier.status
    else {
        return None;
    };

    let message = if compliant {
        format!(
            "Farrier visits average every {average_days} days, within the {threshold_days}-day cycle"
        )
    } else {
        format!(
            "Farrier visits average every {average_days} days. Consider tightening to every {threshold_days} days"
        )
    };
    Some(Insight::new(InsightKind::FarrierCycle, message))
}

fn deworming_staleness(entity: &TrackedEntity, now: DateTime<Utc>) -> Option<Insight> {
    let dewormings: Vec<_> = entity.events_of(EventCategory::Deworming).collect();
    if dewormings.len() < MIN_EVENTS_FOR_INTERVAL {
        return None;
    }
    let latest = dewormings.iter().map(|e| e.occurred_on).max()?;
    let days_since = (now - latest).num_days();
    if days_since <= DEWORMING_STALE_DAYS {
        return None;
    }
    Some(Insight::new(
        InsightKind::DewormingStale,
        format!("Last deworming was {days_since} days ago. Time to schedule the next one"),
    ))
}

fn cost_concentration(entity: &TrackedEntity) -> Option<Insight> {
    let total = entity.total_cost();
    if total.is_zero() {
        return None;
    }

    // Strictly-greater keeps the earlier category on ties.
    let mut top: Option<(EventCategory, Cost)> = None;
    for category in EventCategory::ALL {
        let spent: Cost = entity.events_of(category).map(|e| e.cost_or_zero()).sum();
        if top.map_or(true, |(_, best)| spent > best) {
            top = Some((category, spent));
        }
    }
    let (category, spent) = top?;
    let percent = (spent.value() / total.value() * 100.0).round() as i64;

    Some(Insight::new(
        InsightKind::CostConcentration,
        format!("{category} accounts for {percent}% of recorded costs"),
    ))
}
