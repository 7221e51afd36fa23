//! Crop Advisor Rust Implementation
//!
//! Rule-based decision support for choosing what to plant. Four categorical
//! farm conditions go in; a recommended crop with market data, fertilizers,
//! a budget estimate, risk flags, advice, and a rationale comes out.
//!
//! Layout:
//! - `inputs`: closed vocabularies for soil, season, duration, and water
//! - `knowledge_base`: static crop profiles
//! - `recommender`: ordered first-match rule table
//! - `advisory/`: risk, budget, advice, rationale, autonomy, and result assembly
//! - `api_server`: axum HTTP surface (feature `api`)
//!
//! Every engine function is pure. Nothing is cached or mutated between calls.

pub mod inputs;
pub mod error;
pub mod knowledge_base;
pub mod recommender;
pub mod advisory;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use inputs::{DurationClass, InputVector, Season, SoilType, WaterAvailability};
pub use error::UnknownCropError;
pub use knowledge_base::{lookup, profile, CropName, CropProfile, MarketTrend};
pub use recommender::{recommend, recommend_with_rule, Recommendation};
pub use advisory::{
    analyze_risk, classify_autonomy, compose_advisory, estimate_budget, explain, AdvisoryGenerator,
    AutonomyMode, BudgetEstimate, JsonFormatter, MarkdownFormatter, RecommendationResult, RiskLevel,
    RiskReport,
};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState, ServerConfig};
