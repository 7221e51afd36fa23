use crate::inputs::{DurationClass, WaterAvailability};
use crate::knowledge_base::{profile, CropName};

pub const DRIP_IRRIGATION_CLAUSE: &str = " Use drip irrigation to conserve water.";
pub const EARLY_MATURING_CLAUSE: &str = " Prefer early-maturing crop varieties.";

/// Base advice with condition-specific remarks appended.
///
/// The water clause always precedes the duration clause.
pub fn compose_advisory(crop: CropName, water: WaterAvailability, duration: DurationClass) -> String {
    let mut advice = String::from(profile(crop).base_advice);
    if water == WaterAvailability::Low {
        advice.push_str(DRIP_IRRIGATION_CLAUSE);
    }
    if duration == DurationClass::Short {
        advice.push_str(EARLY_MATURING_CLAUSE);
    }
    advice
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_clauses_in_order() {
        let advice = compose_advisory(CropName::Maize, WaterAvailability::Low, DurationClass::Short);
        assert_eq!(
            advice,
            "Control fall armyworm. Use drip irrigation to conserve water. Prefer early-maturing crop varieties."
        );
    }

    #[test]
    fn test_single_clause() {
        let advice = compose_advisory(CropName::Rice, WaterAvailability::Medium, DurationClass::Short);
        assert_eq!(advice, "Maintain standing water. Prefer early-maturing crop varieties.");

        let advice = compose_advisory(CropName::Rice, WaterAvailability::Low, DurationClass::Long);
        assert_eq!(advice, "Maintain standing water. Use drip irrigation to conserve water.");
    }

    #[test]
    fn test_no_clause() {
        let advice = compose_advisory(CropName::Cotton, WaterAvailability::High, DurationClass::Long);
        assert_eq!(advice, "Monitor bollworms.");
    }
}
