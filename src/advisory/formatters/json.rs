use crate::advisory::types::RecommendationResult;

/// JSON formatter for recommendations
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format recommendation as pretty-printed JSON
    pub fn format(result: &RecommendationResult) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(result)
    }

    /// Format recommendation as compact JSON (no whitespace)
    pub fn format_compact(result: &RecommendationResult) -> Result<String, serde_json::Error> {
        serde_json::to_string(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::AdvisoryGenerator;
    use crate::inputs::{DurationClass, InputVector, Season, SoilType, WaterAvailability};

    fn wheat_result() -> RecommendationResult {
        AdvisoryGenerator::generate(&InputVector::new(
            SoilType::Black,
            Season::Rabi,
            DurationClass::Medium,
            WaterAvailability::Low,
        ))
    }

    #[test]
    fn test_format_json_fields() {
        let json = JsonFormatter::format(&wheat_result()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["crop"], "Wheat");
        assert_eq!(value["price_range"], "₹2100–2300 per quintal");
        assert_eq!(value["trend"], "Stable");
        assert_eq!(value["fertilizers"], serde_json::json!(["Urea", "DAP"]));
        assert_eq!(value["budget"]["amount"], 27000);
        assert_eq!(value["budget"]["currency"], "INR");
        assert_eq!(value["risks"][0]["text"], "No major risk detected.");
        assert_eq!(value["risks"][0]["severity"], "informational");
        assert_eq!(value["risk_level"], "Low");
        assert_eq!(value["autonomy_mode"]["mode"], "fully_autonomous");
        assert_eq!(value["explanations"].as_array().unwrap().len(), 4);
        assert_eq!(value["matched_rule"], 4);
        assert_eq!(value["inputs"]["soil"], "Black");
        assert_eq!(value["responsibility"]["final_authority"], "Farmer / Agri Expert");
    }

    #[test]
    fn test_format_compact() {
        let json = JsonFormatter::format_compact(&wheat_result()).unwrap();
        assert!(!json.contains("\n  "));
    }
}
