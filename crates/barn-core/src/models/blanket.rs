use serde::{Deserialize, Serialize};

/// Blanket weight tiers, ordered from lightest to heaviest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlanketTier {
    None,
    NoneOrLight,
    LightSheet,
    MediumWeight,
    HeavyWeight,
    HeavyWeightPlus,
}

impl BlanketTier {
    pub const ALL: [BlanketTier; 6] = [
        Self::None,
        Self::NoneOrLight,
        Self::LightSheet,
        Self::MediumWeight,
        Self::HeavyWeight,
        Self::HeavyWeightPlus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "No Blanket",
            Self::NoneOrLight => "None or Light Sheet",
            Self::LightSheet => "Light Sheet",
            Self::MediumWeight => "Medium Weight",
            Self::HeavyWeight => "Heavyweight",
            Self::HeavyWeightPlus => "Heavyweight + Liner",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::None => "Comfortable without a blanket.",
            Self::NoneOrLight => "A light sheet is optional for a clipped coat.",
            Self::LightSheet => "A light, unfilled sheet cuts the wind.",
            Self::MediumWeight => "A medium-weight blanket keeps warmth in.",
            Self::HeavyWeight => "A heavyweight blanket is needed in this cold.",
            Self::HeavyWeightPlus => "Layer a heavyweight blanket over a liner or hood.",
        }
    }
}

/// A classified tier for a specific entity at a given temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlanketRecommendation {
    pub entity_id: String,
    pub temperature_f: f64,
    pub is_clipped: bool,
    pub tier: BlanketTier,
}
