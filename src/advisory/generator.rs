use crate::advisory::autonomy::classify_autonomy;
use crate::advisory::budget::estimate_budget;
use crate::advisory::composer::compose_advisory;
use crate::advisory::rationale::explain;
use crate::advisory::responsibility::responsibility_note;
use crate::advisory::risk_analysis::analyze_risk;
use crate::advisory::types::RecommendationResult;
use crate::inputs::InputVector;
use crate::knowledge_base::profile;
use crate::recommender::recommend_with_rule;

/// Assembles the full recommendation from the individual components
pub struct AdvisoryGenerator;

impl AdvisoryGenerator {
    /// Run the recommender, then derive everything else from its crop.
    ///
    /// Pure: identical inputs always give identical results.
    pub fn generate(input: &InputVector) -> RecommendationResult {
        let recommendation = recommend_with_rule(input);
        let crop = recommendation.crop;
        let crop_profile = profile(crop);

        let risk = analyze_risk(crop, input.water, input.duration);
        let autonomy_mode = classify_autonomy(risk.level);

        tracing::debug!(
            crop = %crop,
            risk_level = %risk.level,
            risks = risk.report.len(),
            "assembled recommendation"
        );

        RecommendationResult {
            crop,
            matched_rule: recommendation.matched_rule,
            inputs: *input,
            price_range: crop_profile.price_display(),
            trend: crop_profile.trend,
            fertilizers: crop_profile.fertilizers.iter().map(|f| f.to_string()).collect(),
            budget: estimate_budget(crop, input.water),
            risks: risk.report,
            risk_level: risk.level,
            autonomy_mode,
            advisory: compose_advisory(crop, input.water, input.duration),
            explanations: explain(input.soil, input.season, input.duration, input.water, crop),
            responsibility: responsibility_note(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::types::{AutonomyMode, RiskLevel};
    use crate::inputs::{DurationClass, Season, SoilType, WaterAvailability};
    use crate::knowledge_base::{CropName, MarketTrend};

    #[test]
    fn test_generate_rice() {
        let input = InputVector::new(
            SoilType::Alluvial,
            Season::Kharif,
            DurationClass::Medium,
            WaterAvailability::High,
        );
        let result = AdvisoryGenerator::generate(&input);

        assert_eq!(result.crop, CropName::Rice);
        assert_eq!(result.matched_rule, Some(1));
        assert_eq!(result.price_range, "₹2200–2400 per quintal");
        assert_eq!(result.trend, MarketTrend::Increasing);
        assert_eq!(result.fertilizers, vec!["Urea".to_string(), "DAP".to_string()]);
        assert_eq!(result.budget.amount, 26000);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.autonomy_mode, AutonomyMode::FullyAutonomous);
        assert_eq!(result.advisory, "Maintain standing water.");
        assert!(result.explanations.iter().all(|e| e.contains("Rice")));
    }

    #[test]
    fn test_generate_sugarcane_escalates_to_human() {
        // Alluvial + Kharif without High water → rule 6
        let input = InputVector::new(
            SoilType::Alluvial,
            Season::Kharif,
            DurationClass::Short,
            WaterAvailability::Low,
        );
        let result = AdvisoryGenerator::generate(&input);

        assert_eq!(result.crop, CropName::Sugarcane);
        assert_eq!(result.risks.len(), 2);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.autonomy_mode, AutonomyMode::HumanInLoop);
        assert_eq!(result.budget.amount, 53000);
        assert_eq!(
            result.advisory,
            "Ensure irrigation. Use drip irrigation to conserve water. Prefer early-maturing crop varieties."
        );
    }

    #[test]
    fn test_generate_is_idempotent() {
        for input in InputVector::all_combinations() {
            let a = AdvisoryGenerator::generate(&input);
            let b = AdvisoryGenerator::generate(&input);
            assert_eq!(a, b);
            assert_eq!(
                serde_json::to_string(&a).unwrap(),
                serde_json::to_string(&b).unwrap()
            );
        }
    }
}
