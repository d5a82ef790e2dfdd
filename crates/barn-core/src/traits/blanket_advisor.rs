use crate::models::BlanketTier;

/// Temperature-based blanket classification.
pub trait IBlanketAdvisor: Send + Sync {
    fn classify(&self, temperature_f: f64, is_clipped: bool) -> BlanketTier;
}
