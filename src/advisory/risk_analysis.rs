//! Risk Analyzer
//!
//! Unlike the recommender, every rule here is evaluated and each match
//! appends its entry. The risk level is derived from which rules fired.

use smallvec::SmallVec;

use crate::advisory::types::{RiskEntry, RiskLevel, RiskReport, RiskSeverity};
use crate::inputs::{DurationClass, WaterAvailability};
use crate::knowledge_base::CropName;

pub const HIGH_WATER_DEMAND: &str = "High water requirement with low availability.";
pub const INSUFFICIENT_DURATION: &str = "Insufficient duration for this crop.";
pub const EXCESS_IRRIGATION: &str = "Excess irrigation not required.";
pub const NO_MAJOR_RISK: &str = "No major risk detected.";

/// One condition → message rule
#[derive(Debug, Clone, Copy)]
pub struct RiskRule {
    pub crops: &'static [CropName],
    pub water: Option<WaterAvailability>,
    pub duration: Option<DurationClass>,
    pub severity: RiskSeverity,
    pub message: &'static str,
    /// Level this rule raises the report to when it fires
    pub level: RiskLevel,
}

impl RiskRule {
    fn matches(&self, crop: CropName, water: WaterAvailability, duration: DurationClass) -> bool {
        self.crops.contains(&crop)
            && self.water.map_or(true, |w| w == water)
            && self.duration.map_or(true, |d| d == duration)
    }
}

static RISK_RULES: &[RiskRule] = &[
    RiskRule {
        crops: &[CropName::Rice, CropName::Sugarcane],
        water: Some(WaterAvailability::Low),
        duration: None,
        severity: RiskSeverity::Warning,
        message: HIGH_WATER_DEMAND,
        level: RiskLevel::High,
    },
    RiskRule {
        crops: &[CropName::Cotton, CropName::Sugarcane],
        water: None,
        duration: Some(DurationClass::Short),
        severity: RiskSeverity::Warning,
        message: INSUFFICIENT_DURATION,
        level: RiskLevel::Medium,
    },
    RiskRule {
        crops: &[CropName::Millets, CropName::Pulses],
        water: Some(WaterAvailability::High),
        duration: None,
        severity: RiskSeverity::Informational,
        message: EXCESS_IRRIGATION,
        level: RiskLevel::Low,
    },
];

/// Risk entries and the level they imply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskAssessment {
    pub report: RiskReport,
    pub level: RiskLevel,
}

/// Run every risk rule against the crop and conditions.
///
/// The report is never empty: when nothing fires it holds a single
/// informational "no major risk" entry. The level is the highest level
/// among fired rules, so High wins over Medium when both fire.
pub fn analyze_risk(
    crop: CropName,
    water: WaterAvailability,
    duration: DurationClass,
) -> RiskAssessment {
    let mut entries: SmallVec<[RiskEntry; 3]> = SmallVec::new();
    let mut level = RiskLevel::Low;

    for rule in RISK_RULES.iter().filter(|r| r.matches(crop, water, duration)) {
        entries.push(RiskEntry { text: rule.message.to_string(), severity: rule.severity });
        level = level.max(rule.level);
    }

    if entries.is_empty() {
        entries.push(RiskEntry::informational(NO_MAJOR_RISK));
    }

    RiskAssessment { report: RiskReport { entries }, level }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rice_low_water() {
        for duration in DurationClass::ALL {
            let a = analyze_risk(CropName::Rice, WaterAvailability::Low, duration);
            assert!(a.report.contains_text(HIGH_WATER_DEMAND));
            assert_eq!(a.level, RiskLevel::High);
        }
    }

    #[test]
    fn test_millets_high_water() {
        for duration in DurationClass::ALL {
            let a = analyze_risk(CropName::Millets, WaterAvailability::High, duration);
            assert_eq!(a.report.len(), 1);
            assert_eq!(a.report.entries[0], RiskEntry::informational(EXCESS_IRRIGATION));
            assert_eq!(a.level, RiskLevel::Low);
        }
    }

    #[test]
    fn test_sugarcane_both_rules_fire() {
        let a = analyze_risk(CropName::Sugarcane, WaterAvailability::Low, DurationClass::Short);
        let texts: Vec<&str> = a.report.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec![HIGH_WATER_DEMAND, INSUFFICIENT_DURATION]);
        assert_eq!(a.level, RiskLevel::High);
    }

    #[test]
    fn test_cotton_short_duration() {
        let a = analyze_risk(CropName::Cotton, WaterAvailability::Medium, DurationClass::Short);
        assert_eq!(a.report.entries[0], RiskEntry::warning(INSUFFICIENT_DURATION));
        assert_eq!(a.level, RiskLevel::Medium);
    }

    #[test]
    fn test_no_risk_sentinel() {
        let a = analyze_risk(CropName::Wheat, WaterAvailability::Medium, DurationClass::Medium);
        assert_eq!(a.report.len(), 1);
        assert_eq!(a.report.entries[0], RiskEntry::informational(NO_MAJOR_RISK));
        assert_eq!(a.level, RiskLevel::Low);
    }

    #[test]
    fn test_report_never_empty() {
        for crop in CropName::ALL {
            for water in WaterAvailability::ALL {
                for duration in DurationClass::ALL {
                    assert!(!analyze_risk(crop, water, duration).report.is_empty());
                }
            }
        }
    }
}
