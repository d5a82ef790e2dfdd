use std::collections::HashSet;

use barn_core::models::BucketKind;
use barn_core::{EventCategory, ScheduledEvent, TrackedEntity};
use barn_schedule::{bucketize, suggest_next_due};
use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

fn arb_category() -> impl Strategy<Value = EventCategory> {
    prop_oneof![
        Just(EventCategory::Farrier),
        Just(EventCategory::Vet),
        Just(EventCategory::Deworming),
        Just(EventCategory::Dental),
    ]
}

/// (category, occurred offset in hours, optional due offset in hours)
fn arb_event() -> impl Strategy<Value = (EventCategory, i64, Option<i64>)> {
    (
        arb_category(),
        -20_000i64..0,
        prop::option::of(-5_000i64..10_000),
    )
}

fn arb_herd() -> impl Strategy<Value = Vec<Vec<(EventCategory, i64, Option<i64>)>>> {
    prop::collection::vec(prop::collection::vec(arb_event(), 0..8), 0..6)
}

fn build_herd(layout: &[Vec<(EventCategory, i64, Option<i64>)>]) -> Vec<TrackedEntity> {
    layout.iter()
        .enumerate()
        .map(|(h, events)| {
            events.iter().enumerate().fold(
                TrackedEntity::new(format!("horse-{h}")).with_id(format!("h{h}")),
                |entity, (i, (category, occurred, due))| {
                    let mut event = ScheduledEvent::new(*category, base() + Duration::hours(*occurred))
                        .with_id(format!("h{h}-e{i}"));
                    event.next_due_on = due.map(|d| base() + Duration::hours(d));
                    entity.with_event(event)
                },
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn every_due_event_lands_in_exactly_one_bucket(layout in arb_herd()) {
        let herd = build_herd(&layout);
        let buckets = bucketize(&herd, base(), None);

        let placed: Vec<&str> = buckets
            .iter()
            .flat_map(|b| b.entries.iter().map(|e| e.event.id.as_str()))
            .collect();
        let unique: HashSet<&str> = placed.iter().copied().collect();
        prop_assert_eq!(placed.len(), unique.len(), "an event was placed twice");

        let expected: HashSet<String> = herd
            .iter()
            .flat_map(|h| h.events.iter())
            .filter(|e| e.next_due_on.is_some())
            .map(|e| e.id.clone())
            .collect();
        let got: HashSet<String> = unique.into_iter().map(str::to_string).collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn buckets_are_non_empty_and_in_fixed_order(layout in arb_herd()) {
        let buckets = bucketize(&build_herd(&layout), base(), None);
        prop_assert!(buckets.iter().all(|b| !b.is_empty()));
        let order: Vec<BucketKind> = buckets.iter().map(|b| b.kind).collect();
        prop_assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn entries_within_a_bucket_ascend_by_due_date(layout in arb_herd()) {
        for bucket in bucketize(&build_herd(&layout), base(), None) {
            let dues: Vec<_> = bucket.entries.iter().filter_map(|e| e.event.next_due_on).collect();
            prop_assert!(dues.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn filtered_buckets_only_hold_the_filtered_category(
        layout in arb_herd(),
        category in arb_category(),
    ) {
        for bucket in bucketize(&build_herd(&layout), base(), Some(category)) {
            prop_assert!(bucket.entries.iter().all(|e| e.event.category == category));
        }
    }

    #[test]
    fn farrier_projection_stays_between_six_and_eight_weeks(
        days in -60_000i64..60_000,
        seconds in 0i64..86_400,
    ) {
        let d = base() + Duration::days(days) + Duration::seconds(seconds);
        let due = suggest_next_due(EventCategory::Farrier, d);
        prop_assert!(due >= d + Duration::weeks(6));
        prop_assert!(due <= d + Duration::weeks(8));
    }

    #[test]
    fn month_based_projections_never_go_backwards(
        days in -60_000i64..60_000,
        category in arb_category(),
    ) {
        let d = base() + Duration::days(days);
        prop_assert!(suggest_next_due(category, d) > d);
    }
}
