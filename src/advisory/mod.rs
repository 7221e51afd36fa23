//! Advisory derivation
//!
//! Everything computed from the recommended crop: risk, budget, advice text,
//! rationale, oversight policy, and the assembled result.

pub mod types;
pub mod risk_analysis;
pub mod budget;
pub mod composer;
pub mod rationale;
pub mod autonomy;
pub mod responsibility;
pub mod generator;
pub mod formatters;

pub use types::{
    AutonomyMode, BudgetEstimate, RecommendationResult, ResponsibilityNote, RiskEntry, RiskLevel,
    RiskReport, RiskSeverity,
};

pub use risk_analysis::{analyze_risk, RiskAssessment};
pub use budget::estimate_budget;
pub use composer::compose_advisory;
pub use rationale::explain;
pub use autonomy::classify_autonomy;
pub use responsibility::responsibility_note;

pub use generator::AdvisoryGenerator;
pub use formatters::{JsonFormatter, MarkdownFormatter};
