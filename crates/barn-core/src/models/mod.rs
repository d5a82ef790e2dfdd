pub mod analysis;
pub mod blanket;
pub mod bucket;
pub mod compliance;

pub use analysis::{EntityAnalysis, Insight, InsightKind};
pub use blanket::{BlanketRecommendation, BlanketTier};
pub use bucket::{BucketEntry, BucketKind, MaintenanceBucket};
pub use compliance::{CategoryCompliance, ComplianceReport, ComplianceStatus};
