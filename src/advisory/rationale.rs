//! Decision rationale
//!
//! Restates each input against the chosen crop. This is an audit trail,
//! not a proof that the rule table is right.

use crate::inputs::{DurationClass, Season, SoilType, WaterAvailability};
use crate::knowledge_base::CropName;

/// Exactly four lines, in soil → season → duration → water order.
pub fn explain(
    soil: SoilType,
    season: Season,
    duration: DurationClass,
    water: WaterAvailability,
    crop: CropName,
) -> [String; 4] {
    [
        format!("Soil type ({}) supports {}.", soil, crop),
        format!("Season ({}) matches {}.", season, crop),
        format!("Crop duration ({}) is compatible with {}.", duration.label_with_range(), crop),
        format!("Water availability ({}) was considered for {}.", water, crop),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_cotton() {
        let lines = explain(
            SoilType::Black,
            Season::Kharif,
            DurationClass::Long,
            WaterAvailability::Medium,
            CropName::Cotton,
        );
        assert_eq!(lines[0], "Soil type (Black) supports Cotton.");
        assert_eq!(lines[1], "Season (Kharif) matches Cotton.");
        assert_eq!(lines[2], "Crop duration (Long (5+ months)) is compatible with Cotton.");
        assert_eq!(lines[3], "Water availability (Medium) was considered for Cotton.");
    }
}
