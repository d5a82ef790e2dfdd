use barn_core::policy::*;
use barn_core::EventCategory;

#[test]
fn farrier_policy_is_seven_weeks_with_56_day_threshold() {
    let policy = CyclePolicy::for_category(EventCategory::Farrier);
    assert_eq!(policy.offset, RecurrenceOffset::new(CalendarUnit::Week, 7));
    assert_eq!(policy.compliance_threshold_days, 56);
}

#[test]
fn vet_policy_is_six_months_with_200_day_threshold() {
    assert_eq!(
        default_offset(EventCategory::Vet),
        RecurrenceOffset::new(CalendarUnit::Month, 6)
    );
    assert_eq!(compliance_threshold_days(EventCategory::Vet), 200);
}

#[test]
fn deworming_policy_is_two_months_with_70_day_threshold() {
    assert_eq!(
        default_offset(EventCategory::Deworming),
        RecurrenceOffset::new(CalendarUnit::Month, 2)
    );
    assert_eq!(compliance_threshold_days(EventCategory::Deworming), 70);
}

#[test]
fn dental_policy_is_one_year_with_395_day_threshold() {
    assert_eq!(
        default_offset(EventCategory::Dental),
        RecurrenceOffset::new(CalendarUnit::Year, 1)
    );
    assert_eq!(compliance_threshold_days(EventCategory::Dental), 395);
}

#[test]
fn every_category_has_a_positive_policy() {
    for category in EventCategory::ALL {
        let policy = CyclePolicy::for_category(category);
        assert!(policy.offset.amount > 0, "{category} has a zero offset");
        assert!(policy.compliance_threshold_days > 0);
    }
}

#[test]
fn offset_display_pluralizes() {
    assert_eq!(RecurrenceOffset::new(CalendarUnit::Year, 1).to_string(), "+1 year");
    assert_eq!(RecurrenceOffset::new(CalendarUnit::Week, 7).to_string(), "+7 weeks");
}
