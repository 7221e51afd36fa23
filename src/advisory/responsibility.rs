use crate::advisory::types::ResponsibilityNote;

pub const MODEL_VERSION: &str = "v1.0";

/// Accountability record attached to every recommendation.
/// The engine advises; the farmer decides.
pub fn responsibility_note() -> ResponsibilityNote {
    ResponsibilityNote {
        model_type: "Rule-Based Responsible AI",
        decision_owner: "AI Farmer Assistant (Advisory)",
        final_authority: "Farmer / Agri Expert",
        model_version: MODEL_VERSION,
    }
}
