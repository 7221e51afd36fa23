//! Crop Recommender
//!
//! Ordered first-match rule table. Rule order is load-bearing: several
//! predicates can hold for the same input and the earlier rule always wins.
//! Inputs matching no rule fall back to Maize.

use serde::Serialize;

use crate::inputs::{DurationClass, InputVector, Season, SoilType, WaterAvailability};
use crate::knowledge_base::CropName;

use crate::inputs::DurationClass as D;
use crate::inputs::Season as S;
use crate::inputs::SoilType as Soil;
use crate::inputs::WaterAvailability as W;

/// Crop returned when no rule matches
pub const FALLBACK_CROP: CropName = CropName::Maize;

/// One row of the rule table. `None` means the dimension is unconstrained;
/// constrained dimensions are ANDed.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationRule {
    pub number: u8,
    pub soil: Option<SoilType>,
    pub season: Option<Season>,
    pub duration: Option<DurationClass>,
    pub water: Option<WaterAvailability>,
    pub crop: CropName,
}

impl RecommendationRule {
    pub fn matches(&self, input: &InputVector) -> bool {
        self.soil.map_or(true, |s| s == input.soil)
            && self.season.map_or(true, |s| s == input.season)
            && self.duration.map_or(true, |d| d == input.duration)
            && self.water.map_or(true, |w| w == input.water)
    }
}

const fn rule(
    number: u8,
    soil: Option<SoilType>,
    season: Option<Season>,
    duration: Option<DurationClass>,
    water: Option<WaterAvailability>,
    crop: CropName,
) -> RecommendationRule {
    RecommendationRule { number, soil, season, duration, water, crop }
}

static RECOMMENDATION_RULES: &[RecommendationRule] = &[
    rule(1, Some(Soil::Alluvial), None, None, Some(W::High), CropName::Rice),
    rule(2, Some(Soil::Black), Some(S::Kharif), Some(D::Long), None, CropName::Cotton),
    rule(3, Some(Soil::Red), Some(S::Rabi), None, None, CropName::Groundnut),
    rule(4, Some(Soil::Black), Some(S::Rabi), None, None, CropName::Wheat),
    rule(5, Some(Soil::Sandy), None, None, Some(W::Low), CropName::Millets),
    rule(6, Some(Soil::Alluvial), Some(S::Kharif), None, None, CropName::Sugarcane),
    rule(7, Some(Soil::Red), None, Some(D::Short), None, CropName::Pulses),
    rule(8, Some(Soil::Black), None, Some(D::Medium), None, CropName::Soybean),
    rule(9, Some(Soil::Sandy), Some(S::Zaid), None, None, CropName::Sunflower),
];

/// The rule table in evaluation order
pub fn rules() -> &'static [RecommendationRule] {
    RECOMMENDATION_RULES
}

/// Recommended crop plus the rule that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub crop: CropName,
    /// 1-based rule number, `None` for the fallback
    pub matched_rule: Option<u8>,
}

/// Evaluate the rule table top to bottom and stop at the first match.
pub fn recommend_with_rule(input: &InputVector) -> Recommendation {
    match RECOMMENDATION_RULES.iter().find(|r| r.matches(input)) {
        Some(r) => {
            tracing::debug!(rule = r.number, crop = %r.crop, "recommendation rule matched");
            Recommendation { crop: r.crop, matched_rule: Some(r.number) }
        }
        None => {
            tracing::debug!(crop = %FALLBACK_CROP, "no rule matched, using fallback");
            Recommendation { crop: FALLBACK_CROP, matched_rule: None }
        }
    }
}

/// Map the four inputs to exactly one crop. Total.
pub fn recommend(
    soil: SoilType,
    season: Season,
    duration: DurationClass,
    water: WaterAvailability,
) -> CropName {
    recommend_with_rule(&InputVector::new(soil, season, duration, water)).crop
}
