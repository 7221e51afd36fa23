//! Farm condition inputs
//!
//! The four categorical values a farmer supplies. Each vocabulary is closed;
//! hosts restrict input to these enumerants before calling the engine.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Soil type of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum SoilType {
    Black,
    Red,
    Alluvial,
    Sandy,
}

impl SoilType {
    pub const ALL: [SoilType; 4] = [SoilType::Black, SoilType::Red, SoilType::Alluvial, SoilType::Sandy];

    pub fn label(&self) -> &'static str {
        match self {
            SoilType::Black => "Black",
            SoilType::Red => "Red",
            SoilType::Alluvial => "Alluvial",
            SoilType::Sandy => "Sandy",
        }
    }
}

/// Indian cropping season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Season {
    /// Monsoon sowing (June-July)
    Kharif,
    /// Winter sowing (October-November)
    Rabi,
    /// Short summer season between Rabi and Kharif
    Zaid,
}

impl Season {
    pub const ALL: [Season; 3] = [Season::Kharif, Season::Rabi, Season::Zaid];

    pub fn label(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Zaid => "Zaid",
        }
    }
}

/// Coarse crop-cycle length bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum DurationClass {
    Short,
    Medium,
    Long,
}

impl DurationClass {
    pub const ALL: [DurationClass; 3] = [DurationClass::Short, DurationClass::Medium, DurationClass::Long];

    pub fn label(&self) -> &'static str {
        match self {
            DurationClass::Short => "Short",
            DurationClass::Medium => "Medium",
            DurationClass::Long => "Long",
        }
    }

    /// Display range shown next to the label. Not used by any rule.
    pub fn display_range(&self) -> &'static str {
        match self {
            DurationClass::Short => "2–3 months",
            DurationClass::Medium => "3–5 months",
            DurationClass::Long => "5+ months",
        }
    }

    /// "Short (2–3 months)"
    pub fn label_with_range(&self) -> String {
        format!("{} ({})", self.label(), self.display_range())
    }
}

/// Irrigation water available to the farmer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum WaterAvailability {
    Low,
    Medium,
    High,
}

impl WaterAvailability {
    pub const ALL: [WaterAvailability; 3] =
        [WaterAvailability::Low, WaterAvailability::Medium, WaterAvailability::High];

    pub fn label(&self) -> &'static str {
        match self {
            WaterAvailability::Low => "Low",
            WaterAvailability::Medium => "Medium",
            WaterAvailability::High => "High",
        }
    }
}

macro_rules! impl_display_via_label {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

impl_display_via_label!(SoilType, Season, DurationClass, WaterAvailability);

/// The complete input vector for one recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputVector {
    pub soil: SoilType,
    pub season: Season,
    pub duration: DurationClass,
    pub water: WaterAvailability,
}

impl InputVector {
    pub fn new(
        soil: SoilType,
        season: Season,
        duration: DurationClass,
        water: WaterAvailability,
    ) -> Self {
        Self { soil, season, duration, water }
    }

    /// Every combination of the four vocabularies (4 × 3 × 3 × 3 = 108),
    /// in soil → season → duration → water order.
    pub fn all_combinations() -> impl Iterator<Item = InputVector> {
        SoilType::ALL.into_iter().flat_map(|soil| {
            Season::ALL.into_iter().flat_map(move |season| {
                DurationClass::ALL.into_iter().flat_map(move |duration| {
                    WaterAvailability::ALL
                        .into_iter()
                        .map(move |water| InputVector::new(soil, season, duration, water))
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_combinations_count() {
        let combos: Vec<InputVector> = InputVector::all_combinations().collect();
        assert_eq!(combos.len(), 108);

        let unique: HashSet<InputVector> = combos.iter().copied().collect();
        assert_eq!(unique.len(), 108);
    }

    #[test]
    fn test_duration_ranges() {
        assert_eq!(DurationClass::Short.label_with_range(), "Short (2–3 months)");
        assert_eq!(DurationClass::Medium.label_with_range(), "Medium (3–5 months)");
        assert_eq!(DurationClass::Long.label_with_range(), "Long (5+ months)");
    }

    #[test]
    fn test_serde_labels() {
        let input = InputVector::new(
            SoilType::Alluvial,
            Season::Kharif,
            DurationClass::Long,
            WaterAvailability::High,
        );
        let json = serde_json::to_value(input).unwrap();
        assert_eq!(json["soil"], "Alluvial");
        assert_eq!(json["season"], "Kharif");
        assert_eq!(json["duration"], "Long");
        assert_eq!(json["water"], "High");

        let back: InputVector = serde_json::from_value(json).unwrap();
        assert_eq!(back, input);
    }

    #[test]
    fn test_unknown_label_rejected() {
        let json = serde_json::json!({
            "soil": "Clay", "season": "Kharif", "duration": "Long", "water": "High"
        });
        assert!(serde_json::from_value::<InputVector>(json).is_err());
    }
}
