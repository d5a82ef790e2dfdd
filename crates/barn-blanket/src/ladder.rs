use barn_core::models::BlanketTier;

/// Temperature brackets of the classification ladder, warmest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureBracket {
    /// Strictly above 60 °F.
    Warm,
    /// 50 °F through 60 °F, both inclusive.
    Mild,
    /// 40 °F up to but excluding 50 °F.
    Cool,
    /// 30 °F up to but excluding 40 °F.
    Cold,
    /// Below 30 °F. NaN lands here too.
    Freezing,
}

impl TemperatureBracket {
    pub fn of(temperature_f: f64) -> Self {
        if temperature_f > 60.0 {
            Self::Warm
        } else if temperature_f >= 50.0 {
            Self::Mild
        } else if temperature_f >= 40.0 {
            Self::Cool
        } else if temperature_f >= 30.0 {
            Self::Cold
        } else {
            Self::Freezing
        }
    }

    /// Tier for this bracket and coat state.
    pub fn tier(self, is_clipped: bool) -> BlanketTier {
        match (self, is_clipped) {
            (Self::Warm, false) => BlanketTier::None,
            (Self::Warm, true) => BlanketTier::NoneOrLight,
            (Self::Mild, false) => BlanketTier::None,
            (Self::Mild, true) => BlanketTier::LightSheet,
            (Self::Cool, false) => BlanketTier::LightSheet,
            (Self::Cool, true) => BlanketTier::MediumWeight,
            (Self::Cold, false) => BlanketTier::MediumWeight,
            (Self::Cold, true) => BlanketTier::HeavyWeight,
            (Self::Freezing, false) => BlanketTier::HeavyWeight,
            (Self::Freezing, true) => BlanketTier::HeavyWeightPlus,
        }
    }
}

/// Classify a temperature and coat state into a blanket tier.
pub fn classify(temperature_f: f64, is_clipped: bool) -> BlanketTier {
    TemperatureBracket::of(temperature_f).tier(is_clipped)
}
