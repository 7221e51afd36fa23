//! Crop Knowledge Base
//!
//! Static agronomic and market profile for each of the ten crops the
//! recommender can emit. Prices and trends are fixed placeholders, not a feed.
//!
//! The table is a fixed-size array ordered exactly like `CropName::ALL`, so a
//! profile lookup by `CropName` is an index and can never miss.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownCropError;

/// Closed set of crops known to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CropName {
    Rice,
    Wheat,
    Cotton,
    Maize,
    Groundnut,
    Millets,
    Sugarcane,
    Pulses,
    Soybean,
    Sunflower,
}

impl CropName {
    pub const ALL: [CropName; 10] = [
        CropName::Rice,
        CropName::Wheat,
        CropName::Cotton,
        CropName::Maize,
        CropName::Groundnut,
        CropName::Millets,
        CropName::Sugarcane,
        CropName::Pulses,
        CropName::Soybean,
        CropName::Sunflower,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CropName::Rice => "Rice",
            CropName::Wheat => "Wheat",
            CropName::Cotton => "Cotton",
            CropName::Maize => "Maize",
            CropName::Groundnut => "Groundnut",
            CropName::Millets => "Millets",
            CropName::Sugarcane => "Sugarcane",
            CropName::Pulses => "Pulses",
            CropName::Soybean => "Soybean",
            CropName::Sunflower => "Sunflower",
        }
    }
}

impl fmt::Display for CropName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CropName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for CropName {
    type Err = UnknownCropError;

    /// Case-insensitive match against the ten crop names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        CropName::ALL
            .into_iter()
            .find(|crop| crop.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownCropError::new(s))
    }
}

/// Direction of recent market prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarketTrend {
    Increasing,
    Stable,
    Decreasing,
}

impl fmt::Display for MarketTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MarketTrend::Increasing => "Increasing",
            MarketTrend::Stable => "Stable",
            MarketTrend::Decreasing => "Decreasing",
        })
    }
}

/// Agronomic and economic profile of one crop
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CropProfile {
    pub crop: CropName,
    /// Mandi price band, "₹low–high"
    pub price_range: &'static str,
    pub price_unit: &'static str,
    pub trend: MarketTrend,
    /// Cultivation cost in INR per acre at medium water availability
    pub base_budget_per_acre: i64,
    /// Display order only
    pub fertilizers: &'static [&'static str],
    pub base_advice: &'static str,
}

impl CropProfile {
    /// "₹2200–2400 per quintal"
    pub fn price_display(&self) -> String {
        format!("{} per {}", self.price_range, self.price_unit)
    }
}

// ============================================================================
// EMBEDDED PROFILE TABLE
// Order must match CropName::ALL
// ============================================================================

static CROP_PROFILES: [CropProfile; 10] = [
    CropProfile { crop: CropName::Rice, price_range: "₹2200–2400", price_unit: "quintal", trend: MarketTrend::Increasing, base_budget_per_acre: 28000, fertilizers: &["Urea", "DAP"], base_advice: "Maintain standing water." },
    CropProfile { crop: CropName::Wheat, price_range: "₹2100–2300", price_unit: "quintal", trend: MarketTrend::Stable, base_budget_per_acre: 24000, fertilizers: &["Urea", "DAP"], base_advice: "Ensure timely irrigation." },
    CropProfile { crop: CropName::Cotton, price_range: "₹6300–6700", price_unit: "quintal", trend: MarketTrend::Stable, base_budget_per_acre: 40000, fertilizers: &["NPK", "Zinc"], base_advice: "Monitor bollworms." },
    CropProfile { crop: CropName::Maize, price_range: "₹2000–2200", price_unit: "quintal", trend: MarketTrend::Stable, base_budget_per_acre: 24000, fertilizers: &["Urea", "DAP"], base_advice: "Control fall armyworm." },
    CropProfile { crop: CropName::Groundnut, price_range: "₹5000–5400", price_unit: "quintal", trend: MarketTrend::Decreasing, base_budget_per_acre: 30000, fertilizers: &["Gypsum", "SSP"], base_advice: "Ensure drainage." },
    CropProfile { crop: CropName::Millets, price_range: "₹2800–3200", price_unit: "quintal", trend: MarketTrend::Increasing, base_budget_per_acre: 17000, fertilizers: &["Compost"], base_advice: "Low water crop." },
    CropProfile { crop: CropName::Sugarcane, price_range: "₹340–380", price_unit: "quintal", trend: MarketTrend::Stable, base_budget_per_acre: 50000, fertilizers: &["Urea", "DAP"], base_advice: "Ensure irrigation." },
    CropProfile { crop: CropName::Pulses, price_range: "₹6000–6500", price_unit: "quintal", trend: MarketTrend::Increasing, base_budget_per_acre: 20000, fertilizers: &["DAP"], base_advice: "Avoid excess nitrogen." },
    CropProfile { crop: CropName::Soybean, price_range: "₹4200–4600", price_unit: "quintal", trend: MarketTrend::Stable, base_budget_per_acre: 28000, fertilizers: &["DAP"], base_advice: "Ensure drainage." },
    CropProfile { crop: CropName::Sunflower, price_range: "₹5500–6000", price_unit: "quintal", trend: MarketTrend::Increasing, base_budget_per_acre: 22000, fertilizers: &["Urea"], base_advice: "Control leaf spot." },
];

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// Profile for a crop the engine already knows about. Total.
pub fn profile(crop: CropName) -> &'static CropProfile {
    &CROP_PROFILES[crop as usize]
}

/// Profile for a crop given by name (case-insensitive).
///
/// # Examples
/// ```
/// use crop_advisor_rust::knowledge_base::lookup;
///
/// let wheat = lookup("Wheat").unwrap();
/// assert_eq!(wheat.base_budget_per_acre, 24000);
/// assert!(lookup("Barley").is_err());
/// ```
pub fn lookup(name: &str) -> Result<&'static CropProfile, UnknownCropError> {
    let crop: CropName = name.parse()?;
    Ok(profile(crop))
}

/// All profiles in `CropName::ALL` order
pub fn all_profiles() -> &'static [CropProfile] {
    &CROP_PROFILES
}
