use chrono::{DateTime, Utc};
use tracing::debug;

use barn_core::config::DashboardConfig;
use barn_core::errors::ConfigError;
use barn_core::models::EntityAnalysis;
use barn_core::traits::IComplianceAnalyzer;
use barn_core::TrackedEntity;
use barn_observability::analysis_span;

use crate::costs::{self, CostSummary};
use crate::{compliance, insights, projection};

/// Compliance scoring, insight generation, and cost analytics.
#[derive(Debug, Clone, Default)]
pub struct InsightEngine {
    dashboard: DashboardConfig,
}

impl InsightEngine {
    /// Create an engine with the default dashboard settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom dashboard settings, rejecting out-of-range values.
    pub fn with_dashboard(dashboard: DashboardConfig) -> Result<Self, ConfigError> {
        dashboard.validate()?;
        Ok(Self { dashboard })
    }

    pub fn dashboard(&self) -> &DashboardConfig {
        &self.dashboard
    }

    /// Barn-wide cost dashboard.
    pub fn summarize_costs(&self, entities: &[TrackedEntity], now: DateTime<Utc>) -> CostSummary {
        costs::summarize_costs(entities, now, &self.dashboard)
    }
}

impl IComplianceAnalyzer for InsightEngine {
    fn analyze(&self, entity: &TrackedEntity, now: DateTime<Utc>) -> EntityAnalysis {
        let _span = analysis_span!(entity.id).entered();

        let compliance = compliance::compliance_report(entity);
        let overdue_count = entity.events.iter().filter(|e| e.is_overdue(now)).count();
        let insights = insights::generate(entity, &compliance, overdue_count, now);
        let projected_annual_cost = projection::projected_annual_cost(&entity.events, now);

        debug!(
            overdue = overdue_count,
            insights = insights.len(),
            projected_annual = %projected_annual_cost,
            "analyzed entity"
        );

        EntityAnalysis {
            entity_id: entity.id.clone(),
            compliance,
            insights,
            overdue_count,
            projected_annual_cost,
        }
    }
}
