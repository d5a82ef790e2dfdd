//! Property tests for compliance and insight generation.

use barn_core::models::InsightKind;
use barn_core::traits::IComplianceAnalyzer;
use barn_core::{EventCategory, ScheduledEvent, TrackedEntity};
use barn_insights::{category_compliance, intervals_days, InsightEngine};
use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
}

fn arb_category() -> impl Strategy<Value = EventCategory> {
    prop_oneof![
        Just(EventCategory::Farrier),
        Just(EventCategory::Vet),
        Just(EventCategory::Deworming),
        Just(EventCategory::Dental),
    ]
}

fn arb_event() -> impl Strategy<Value = ScheduledEvent> {
    (
        arb_category(),
        0i64..720,
        prop::option::of(-60i64..120),
        prop::option::of(0.0f64..500.0),
    )
        .prop_map(|(category, age, due_offset, cost)| {
            let mut event = ScheduledEvent::new(category, now() - Duration::days(age));
            if let Some(offset) = due_offset {
                event = event.with_next_due(now() + Duration::days(offset));
            }
            if let Some(amount) = cost {
                event = event.with_cost(amount);
            }
            event
        })
}

fn arb_entity() -> impl Strategy<Value = TrackedEntity> {
    prop::collection::vec(arb_event(), 0..16).prop_map(|events| TrackedEntity {
        events,
        ..TrackedEntity::new("Prop")
    })
}

fn priority(kind: InsightKind) -> usize {
    match kind {
        InsightKind::OverdueSummary => 0,
        InsightKind::FarrierCycle => 1,
        InsightKind::DewormingStale => 2,
        InsightKind::CostConcentration => 3,
        InsightKind::KeepLogging => 4,
    }
}

proptest! {
    #[test]
    fn fallback_appears_alone_or_not_at_all(entity in arb_entity()) {
        let insights = InsightEngine::new().analyze(&entity, now()).insights;
        prop_assert!(!insights.is_empty());
        let has_fallback = insights.iter().any(|i| i.kind == InsightKind::KeepLogging);
        prop_assert!(!has_fallback || insights.len() == 1);
    }

    #[test]
    fn insights_are_unique_and_in_priority_order(entity in arb_entity()) {
        let insights = InsightEngine::new().analyze(&entity, now()).insights;
        let ranks: Vec<usize> = insights.iter().map(|i| priority(i.kind)).collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] < w[1]), "ranks {:?}", ranks);
    }

    #[test]
    fn overdue_count_matches_past_due_events(entity in arb_entity()) {
        let analysis = InsightEngine::new().analyze(&entity, now());
        let expected = entity
            .events
            .iter()
            .filter(|e| e.next_due_on.is_some_and(|due| due < now()))
            .count();
        prop_assert_eq!(analysis.overdue_count, expected);
        let has_summary = analysis.insights.iter().any(|i| i.kind == InsightKind::OverdueSummary);
        prop_assert_eq!(has_summary, expected > 0);
    }

    #[test]
    fn intervals_are_non_negative_and_one_shorter(entity in arb_entity(), category in arb_category()) {
        let count = entity.events_of(category).count();
        let intervals = intervals_days(entity.events_of(category));
        prop_assert_eq!(intervals.len(), count.saturating_sub(1));
        prop_assert!(intervals.iter().all(|&d| d >= 0));
    }

    #[test]
    fn average_lies_between_extreme_intervals(entity in arb_entity(), category in arb_category()) {
        let intervals = intervals_days(entity.events_of(category));
        match category_compliance(&entity, category).average_days() {
            None => prop_assert!(intervals.is_empty()),
            Some(avg) => {
                let min = intervals.iter().copied().min().unwrap_or(0);
                let max = intervals.iter().copied().max().unwrap_or(0);
                prop_assert!(min <= avg && avg <= max, "avg {} outside [{}, {}]", avg, min, max);
            }
        }
    }

    #[test]
    fn projection_is_never_negative(entity in arb_entity()) {
        let analysis = InsightEngine::new().analyze(&entity, now());
        prop_assert!(analysis.projected_annual_cost.value() >= 0.0);
        prop_assert!(analysis.projected_annual_cost <= entity.total_cost() * 2.0);
    }
}
