use crate::advisory::types::{AutonomyMode, RiskLevel};

/// Oversight policy for a risk level. Higher risk needs a human closer to the decision.
pub fn classify_autonomy(level: RiskLevel) -> AutonomyMode {
    match level {
        RiskLevel::High => AutonomyMode::HumanInLoop,
        RiskLevel::Medium => AutonomyMode::HumanOnLoop,
        RiskLevel::Low => AutonomyMode::FullyAutonomous,
    }
}
