use crate::advisory::types::BudgetEstimate;
use crate::inputs::WaterAvailability;
use crate::knowledge_base::{profile, CropName};

/// Additive adjustment to the base budget. Low water means paying for
/// supplementary irrigation; ample water saves on it.
pub fn water_modifier(water: WaterAvailability) -> i64 {
    match water {
        WaterAvailability::Low => 3000,
        WaterAvailability::Medium => 0,
        WaterAvailability::High => -2000,
    }
}

/// Base budget per acre adjusted for water availability
pub fn estimate_budget(crop: CropName, water: WaterAvailability) -> BudgetEstimate {
    BudgetEstimate {
        amount: profile(crop).base_budget_per_acre + water_modifier(water),
    }
}
