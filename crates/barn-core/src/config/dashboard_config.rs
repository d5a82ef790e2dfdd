use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Cost dashboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Number of trailing calendar months in the monthly spend series.
    pub monthly_spend_months: u32,
    /// Number of entities listed in the per-entity cost ranking.
    pub top_entities: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            monthly_spend_months: defaults::DEFAULT_MONTHLY_SPEND_MONTHS,
            top_entities: defaults::DEFAULT_TOP_ENTITIES,
        }
    }
}

impl DashboardConfig {
    /// Check the series length and ranking size limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let months = self.monthly_spend_months;
        if months == 0 || months > defaults::MAX_MONTHLY_SPEND_MONTHS {
            return Err(ConfigError::ValidationFailed {
                field: "dashboard.monthly_spend_months".to_string(),
                message: format!(
                    "must be between 1 and {}",
                    defaults::MAX_MONTHLY_SPEND_MONTHS
                ),
            });
        }
        if self.top_entities == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "dashboard.top_entities".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
