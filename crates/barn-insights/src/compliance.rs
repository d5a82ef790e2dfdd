use barn_core::constants::MIN_EVENTS_FOR_INTERVAL;
use barn_core::models::{CategoryCompliance, ComplianceReport, ComplianceStatus};
use barn_core::policy;
use barn_core::{EventCategory, ScheduledEvent, TrackedEntity};

/// Whole-day gaps between consecutive occurrences, oldest first.
///
/// Events are ordered by `occurred_on` (stable for equal dates) before
/// differencing, so every gap is non-negative. Fewer than two events yield
/// an empty vector.
pub fn intervals_days<'a, I>(events: I) -> Vec<i64>
where
    I: IntoIterator<Item = &'a ScheduledEvent>,
{
    let mut ordered: Vec<&ScheduledEvent> = events.into_iter().collect();
    ordered.sort_by_key(|e| e.occurred_on);
    ordered
        .windows(2)
        .map(|pair| (pair[1].occurred_on - pair[0].occurred_on).num_days())
        .collect()
}

/// Compliance of one category for one entity.
pub fn category_compliance(entity: &TrackedEntity, category: EventCategory) -> CategoryCompliance {
    let events: Vec<&ScheduledEvent> = entity.events_of(category).collect();
    if events.len() < MIN_EVENTS_FOR_INTERVAL {
        return CategoryCompliance {
            category,
            status: ComplianceStatus::InsufficientData {
                events: events.len(),
            },
        };
    }

    let intervals = intervals_days(events);
    // Integer mean, truncated.
    let average_days = intervals.iter().sum::<i64>() / intervals.len() as i64;
    let threshold_days = policy::compliance_threshold_days(category);

    CategoryCompliance {
        category,
        status: ComplianceStatus::Measured {
            intervals_days: intervals,
            average_days,
            threshold_days,
            compliant: average_days <= threshold_days,
        },
    }
}

/// Compliance for every category, in declaration order.
pub fn compliance_report(entity: &TrackedEntity) -> ComplianceReport {
    ComplianceReport {
        entity_id: entity.id.clone(),
        categories: EventCategory::ALL
            .into_iter()
            .map(|category| category_compliance(entity, category))
            .collect(),
    }
}
