//! Cost analytics dashboard across the whole barn.

use std::cmp::Ordering;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use barn_core::config::defaults::MAX_MONTHLY_SPEND_MONTHS;
use barn_core::config::DashboardConfig;
use barn_core::{Cost, EventCategory, ScheduledEvent, TrackedEntity};

use crate::projection::projected_annual_cost;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCost {
    pub category: EventCategory,
    pub total: Cost,
    /// Fraction of all recorded cost (0.0–1.0). Zero when nothing was spent.
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityCost {
    pub entity_id: String,
    pub entity_name: String,
    pub total: Cost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySpend {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u32,
    pub total: Cost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    pub total: Cost,
    /// Events that carry a recorded cost.
    pub event_count: usize,
    pub average_per_event: Option<Cost>,
    /// Every category, highest spend first.
    pub by_category: Vec<CategoryCost>,
    /// Highest-spend entities, capped at `DashboardConfig::top_entities`.
    pub by_entity: Vec<EntityCost>,
    /// Trailing calendar months ending with the month of `now`, oldest first.
    pub monthly: Vec<MonthlySpend>,
    pub projected_annual: Cost,
}

/// Aggregate cost analytics over every entity.
pub fn summarize_costs(
    entities: &[TrackedEntity],
    now: DateTime<Utc>,
    config: &DashboardConfig,
) -> CostSummary {
    let all_events = || entities.iter().flat_map(|e| e.events.iter());

    let total: Cost = all_events().map(ScheduledEvent::cost_or_zero).sum();
    let event_count = all_events().filter(|e| e.cost.is_some()).count();
    let average_per_event =
        (event_count > 0).then(|| Cost::new(total.value() / event_count as f64));

    let mut by_category: Vec<CategoryCost> = EventCategory::ALL
        .into_iter()
        .map(|category| {
            let spent: Cost = all_events()
                .filter(|e| e.category == category)
                .map(ScheduledEvent::cost_or_zero)
                .sum();
            let share = if total.is_zero() {
                0.0
            } else {
                spent.value() / total.value()
            };
            CategoryCost {
                category,
                total: spent,
                share,
            }
        })
        .collect();
    by_category.sort_by(|a, b| descending(a.total, b.total));

    let mut by_entity: Vec<EntityCost> = entities
        .iter()
        .map(|entity| EntityCost {
            entity_id: entity.id.clone(),
            entity_name: entity.name.clone(),
            total: entity.total_cost(),
        })
        .collect();
    by_entity.sort_by(|a, b| descending(a.total, b.total));
    by_entity.truncate(config.top_entities);

    let monthly = monthly_spend(all_events(), now, config.monthly_spend_months);
    let projected_annual = projected_annual_cost(all_events(), now);

    debug!(
        entities = entities.len(),
        total = %total,
        projected_annual = %projected_annual,
        "summarized costs"
    );

    CostSummary {
        total,
        event_count,
        average_per_event,
        by_category,
        by_entity,
        monthly,
        projected_annual,
    }
}

fn descending(a: Cost, b: Cost) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Zero-filled per-month totals for the `months` calendar months ending with `now`'s month.
/// `months` is clamped to `1..=MAX_MONTHLY_SPEND_MONTHS`.
fn monthly_spend<'a, I>(events: I, now: DateTime<Utc>, months: u32) -> Vec<MonthlySpend>
where
    I: IntoIterator<Item = &'a ScheduledEvent>,
{
    let months = months.clamp(1, MAX_MONTHLY_SPEND_MONTHS);
    let current = month_index(now.year(), now.month());
    let first = current - i64::from(months) + 1;

    let mut series: Vec<MonthlySpend> = (first..=current)
        .map(|index| {
            let (year, month) = from_month_index(index);
            MonthlySpend {
                year,
                month,
                total: Cost::ZERO,
            }
        })
        .collect();

    for event in events {
        let Some(cost) = event.cost else { continue };
        let index = month_index(event.occurred_on.year(), event.occurred_on.month());
        if (first..=current).contains(&index) {
            series[(index - first) as usize].total += cost;
        }
    }
    series
}

fn month_index(year: i32, month: u32) -> i64 {
    i64::from(year) * 12 + i64::from(month) - 1
}

fn from_month_index(index: i64) -> (i32, u32) {
    (index.div_euclid(12) as i32, index.rem_euclid(12) as u32 + 1)
}
