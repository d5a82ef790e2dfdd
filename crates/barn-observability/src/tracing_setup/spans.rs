//! Span definitions per operation: scheduling, analysis, blanket advice.

/// Create a scheduling span.
#[macro_export]
macro_rules! schedule_span {
    ($entity_count:expr, $filter:expr) => {
        tracing::info_span!("barn.schedule", entity_count = $entity_count, filter = ?$filter)
    };
}

/// Create an analysis span.
#[macro_export]
macro_rules! analysis_span {
    ($entity_id:expr) => {
        tracing::info_span!("barn.analysis", entity_id = %$entity_id)
    };
}

/// Create a blanket classification span.
#[macro_export]
macro_rules! blanket_span {
    ($temperature_f:expr, $is_clipped:expr) => {
        tracing::debug_span!("barn.blanket", temperature_f = $temperature_f, is_clipped = $is_clipped)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SCHEDULE: &str = "barn.schedule";
    pub const ANALYSIS: &str = "barn.analysis";
    pub const BLANKET: &str = "barn.blanket";
}
