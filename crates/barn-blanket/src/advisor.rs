use tracing::debug;

use barn_core::models::{BlanketRecommendation, BlanketTier};
use barn_core::traits::IBlanketAdvisor;
use barn_core::TrackedEntity;
use barn_observability::blanket_span;

use crate::ladder;

/// Blanket advisor over the fixed threshold ladder.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlanketAdvisor;

impl BlanketAdvisor {
    pub fn new() -> Self {
        Self
    }

    /// Recommendation for one entity at the given temperature.
    pub fn recommend(&self, entity: &TrackedEntity, temperature_f: f64) -> BlanketRecommendation {
        BlanketRecommendation {
            entity_id: entity.id.clone(),
            temperature_f,
            is_clipped: entity.is_clipped,
            tier: self.classify(temperature_f, entity.is_clipped),
        }
    }

    /// Recommendation for the coldest reading of a forecast.
    ///
    /// NaN readings are skipped. `None` when no usable reading remains.
    pub fn recommend_for_forecast(
        &self,
        entity: &TrackedEntity,
        temperatures_f: &[f64],
    ) -> Option<BlanketRecommendation> {
        let low = temperatures_f
            .iter()
            .copied()
            .filter(|t| !t.is_nan())
            .min_by(f64::total_cmp)?;
        Some(self.recommend(entity, low))
    }
}

impl IBlanketAdvisor for BlanketAdvisor {
    fn classify(&self, temperature_f: f64, is_clipped: bool) -> BlanketTier {
        let _span = blanket_span!(temperature_f, is_clipped).entered();
        let tier = ladder::classify(temperature_f, is_clipped);
        debug!(tier = ?tier, "classified blanket tier");
        tier
    }
}
