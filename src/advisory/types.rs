use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

use crate::inputs::InputVector;
use crate::knowledge_base::{CropName, MarketTrend};

/// Complete engine output for one input vector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationResult {
    pub crop: CropName,
    /// Rule number that selected the crop, `None` for the fallback
    pub matched_rule: Option<u8>,
    pub inputs: InputVector,
    pub price_range: String,
    pub trend: MarketTrend,
    pub fertilizers: Vec<String>,
    pub budget: BudgetEstimate,
    pub risks: RiskReport,
    pub risk_level: RiskLevel,
    pub autonomy_mode: AutonomyMode,
    pub advisory: String,
    /// One entry per input dimension: soil, season, duration, water
    pub explanations: [String; 4],
    pub responsibility: ResponsibilityNote,
}

/// How a risk entry should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskSeverity {
    #[serde(rename = "warning")]
    Warning,
    #[serde(rename = "informational")]
    Informational,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskEntry {
    pub text: String,
    pub severity: RiskSeverity,
}

impl RiskEntry {
    pub fn warning(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: RiskSeverity::Warning }
    }

    pub fn informational(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: RiskSeverity::Informational }
    }
}

/// Ordered risk entries. Never empty once produced by the analyzer.
/// At most three rules exist, so entries stay inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RiskReport {
    pub entries: SmallVec<[RiskEntry; 3]>,
}

impl RiskReport {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RiskEntry> {
        self.entries.iter()
    }

    pub fn contains_text(&self, text: &str) -> bool {
        self.entries.iter().any(|e| e.text == text)
    }
}

/// Coarse severity derived from which risk rules fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        })
    }
}

/// Degree of human oversight implied by the risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutonomyMode {
    FullyAutonomous,
    HumanOnLoop,
    HumanInLoop,
}

impl AutonomyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AutonomyMode::FullyAutonomous => "fully_autonomous",
            AutonomyMode::HumanOnLoop => "human_on_the_loop",
            AutonomyMode::HumanInLoop => "human_in_the_loop",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AutonomyMode::FullyAutonomous => "Fully Autonomous Recommendation",
            AutonomyMode::HumanOnLoop => "Human-on-the-loop (Monitoring required)",
            AutonomyMode::HumanInLoop => "Human-in-the-loop (Manual confirmation required)",
        }
    }
}

impl Serialize for AutonomyMode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("AutonomyMode", 2)?;
        state.serialize_field("mode", self.as_str())?;
        state.serialize_field("description", self.description())?;
        state.end()
    }
}

/// Water-adjusted cultivation cost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetEstimate {
    pub amount: i64,
}

impl BudgetEstimate {
    pub const CURRENCY: &'static str = "INR";
    pub const UNIT: &'static str = "acre";

    /// "₹27,000 per acre"
    pub fn display(&self) -> String {
        format!("₹{} per {}", group_thousands(self.amount), Self::UNIT)
    }
}

impl fmt::Display for BudgetEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Serialize for BudgetEstimate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("BudgetEstimate", 4)?;
        state.serialize_field("amount", &self.amount)?;
        state.serialize_field("currency", Self::CURRENCY)?;
        state.serialize_field("unit", Self::UNIT)?;
        state.serialize_field("display", &self.display())?;
        state.end()
    }
}

fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Who owns the decision and who has the final say
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponsibilityNote {
    pub model_type: &'static str,
    pub decision_owner: &'static str,
    pub final_authority: &'static str,
    pub model_version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(27000), "27,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-2000), "-2,000");
    }

    #[test]
    fn test_budget_serialization() {
        let json = serde_json::to_value(BudgetEstimate { amount: 22000 }).unwrap();
        assert_eq!(json["amount"], 22000);
        assert_eq!(json["currency"], "INR");
        assert_eq!(json["unit"], "acre");
        assert_eq!(json["display"], "₹22,000 per acre");
    }

    #[test]
    fn test_risk_entry_severity_tags() {
        let json = serde_json::to_value(RiskEntry::informational("No major risk detected.")).unwrap();
        assert_eq!(json["severity"], "informational");
        let json = serde_json::to_value(RiskEntry::warning("x")).unwrap();
        assert_eq!(json["severity"], "warning");
    }

    #[test]
    fn test_autonomy_serialization() {
        let json = serde_json::to_value(AutonomyMode::HumanInLoop).unwrap();
        assert_eq!(json["mode"], "human_in_the_loop");
        assert_eq!(json["description"], "Human-in-the-loop (Manual confirmation required)");
    }
}
