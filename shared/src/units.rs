//! Unit conversion module
//!
//! The calculator works in one of two unit systems. Weight is entered in
//! kilograms or pounds, height in centimeters or inches. BMI is always
//! computed on metric values, so every measurement passes through here
//! before classification.
//!
//! # Design Principles
//!
//! 1. **Metric Core**: Classification runs on kg and cm only
//! 2. **Explicit Units**: A bare `f64` never travels without its `UnitSystem`
//! 3. **Lossless Round Trips**: `from_metric(to_metric(x)) == x` within float tolerance
//! 4. **NaN Propagates**: Conversions never validate; callers check finiteness

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::EngineError;

/// Pounds per kilogram
pub const LBS_PER_KG: f64 = 2.20462;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

// ============================================================================
// Unit System
// ============================================================================

/// Unit system selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilograms and centimeters
    #[default]
    Metric,
    /// Pounds and inches
    Imperial,
}

impl UnitSystem {
    /// Convert a weight in this system to kilograms
    pub fn to_metric_weight(&self, weight: f64) -> f64 {
        match self {
            UnitSystem::Metric => weight,
            UnitSystem::Imperial => weight / LBS_PER_KG,
        }
    }

    /// Convert a height in this system to centimeters
    pub fn to_metric_height(&self, height: f64) -> f64 {
        match self {
            UnitSystem::Metric => height,
            UnitSystem::Imperial => height * CM_PER_INCH,
        }
    }

    /// Convert kilograms to this system's weight unit
    pub fn from_metric_weight(&self, kg: f64) -> f64 {
        match self {
            UnitSystem::Metric => kg,
            UnitSystem::Imperial => kg * LBS_PER_KG,
        }
    }

    /// Convert centimeters to this system's height unit
    pub fn from_metric_height(&self, cm: f64) -> f64 {
        match self {
            UnitSystem::Metric => cm,
            UnitSystem::Imperial => cm / CM_PER_INCH,
        }
    }

    /// Weight unit abbreviation
    pub fn weight_abbreviation(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lb",
        }
    }

    /// Height unit abbreviation
    pub fn height_abbreviation(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "in",
        }
    }

    /// Stable lowercase name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "si" | "kg" | "cm" => Ok(UnitSystem::Metric),
            "imperial" | "us" | "lb" | "lbs" | "in" => Ok(UnitSystem::Imperial),
            _ => Err(EngineError::InvalidUnit(s.to_string())),
        }
    }
}

// ============================================================================
// Free-function conversions
// ============================================================================

/// Normalize a weight to kilograms
pub fn to_metric_weight(weight: f64, unit: UnitSystem) -> f64 {
    unit.to_metric_weight(weight)
}

/// Normalize a height to centimeters
pub fn to_metric_height(height: f64, unit: UnitSystem) -> f64 {
    unit.to_metric_height(height)
}

/// Express kilograms in the given unit system
pub fn from_metric_weight(kg: f64, unit: UnitSystem) -> f64 {
    unit.from_metric_weight(kg)
}

/// Express centimeters in the given unit system
pub fn from_metric_height(cm: f64, unit: UnitSystem) -> f64 {
    unit.from_metric_height(cm)
}

/// Move a weight from one unit system to another
pub fn convert_weight(weight: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    if from == to {
        return weight;
    }
    to.from_metric_weight(from.to_metric_weight(weight))
}

/// Move a height from one unit system to another
pub fn convert_height(height: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    if from == to {
        return height;
    }
    to.from_metric_height(from.to_metric_height(height))
}

// ============================================================================
// Height Display Helper
// ============================================================================

/// Represents height in feet and inches for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeetInchesHeight {
    pub feet: i32,
    pub inches: f64,
}

impl FeetInchesHeight {
    /// Create from total inches
    pub fn from_total_inches(total_inches: f64) -> Self {
        let feet = (total_inches / 12.0).floor() as i32;
        let inches = total_inches - feet as f64 * 12.0;
        Self { feet, inches }
    }

    /// Convert to total inches
    pub fn to_total_inches(&self) -> f64 {
        (self.feet as f64 * 12.0) + self.inches
    }

    /// Create from centimeters
    pub fn from_cm(cm: f64) -> Self {
        Self::from_total_inches(cm / CM_PER_INCH)
    }

    /// Convert to centimeters
    pub fn to_cm(&self) -> f64 {
        self.to_total_inches() * CM_PER_INCH
    }
}

impl fmt::Display for FeetInchesHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'{:.0}\"", self.feet, self.inches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // Weight Conversion Tests
    // =========================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: pounds -> kg -> pounds preserves value
        #[test]
        fn prop_weight_roundtrip_imperial(lbs in 1.0f64..1500.0) {
            let kg = to_metric_weight(lbs, UnitSystem::Imperial);
            let back = from_metric_weight(kg, UnitSystem::Imperial);
            prop_assert!((lbs - back).abs() < 1e-3,
                "Round-trip failed: {} -> {} -> {}", lbs, kg, back);
        }

        /// Property: inches -> cm -> inches preserves value
        #[test]
        fn prop_height_roundtrip_imperial(inches in 1.0f64..120.0) {
            let cm = to_metric_height(inches, UnitSystem::Imperial);
            let back = from_metric_height(cm, UnitSystem::Imperial);
            prop_assert!((inches - back).abs() < 1e-3,
                "Round-trip failed: {} -> {} -> {}", inches, cm, back);
        }

        /// Property: metric conversions are the identity
        #[test]
        fn prop_metric_identity(value in 0.1f64..1000.0) {
            prop_assert_eq!(to_metric_weight(value, UnitSystem::Metric), value);
            prop_assert_eq!(to_metric_height(value, UnitSystem::Metric), value);
            prop_assert_eq!(from_metric_weight(value, UnitSystem::Metric), value);
            prop_assert_eq!(from_metric_height(value, UnitSystem::Metric), value);
        }

        /// Property: switching unit systems and back is lossless
        #[test]
        fn prop_convert_between_systems(weight in 20.0f64..300.0, height in 50.0f64..250.0) {
            let w = convert_weight(weight, UnitSystem::Metric, UnitSystem::Imperial);
            let h = convert_height(height, UnitSystem::Metric, UnitSystem::Imperial);
            let w_back = convert_weight(w, UnitSystem::Imperial, UnitSystem::Metric);
            let h_back = convert_height(h, UnitSystem::Imperial, UnitSystem::Metric);
            prop_assert!((weight - w_back).abs() < 1e-3);
            prop_assert!((height - h_back).abs() < 1e-3);
        }
    }

    #[test]
    fn test_known_conversions() {
        // 154 lb = 69.85 kg
        let kg = to_metric_weight(154.0, UnitSystem::Imperial);
        assert!((kg - 69.853).abs() < 0.01);

        // 69 in = 175.26 cm
        let cm = to_metric_height(69.0, UnitSystem::Imperial);
        assert!((cm - 175.26).abs() < 1e-9);

        // 1 kg = 2.20462 lb
        assert!((from_metric_weight(1.0, UnitSystem::Imperial) - 2.20462).abs() < 1e-9);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(to_metric_weight(f64::NAN, UnitSystem::Imperial).is_nan());
        assert!(to_metric_height(f64::NAN, UnitSystem::Metric).is_nan());
    }

    // =========================================================================
    // FeetInches Tests
    // =========================================================================

    #[test]
    fn test_feet_inches_conversion() {
        let height = FeetInchesHeight { feet: 5, inches: 9.0 };
        // 5'9" = 69 inches = 175.26 cm
        assert!((height.to_cm() - 175.26).abs() < 0.01);

        let back = FeetInchesHeight::from_cm(175.26);
        assert_eq!(back.feet, 5);
        assert!((back.inches - 9.0).abs() < 0.01);
    }

    #[test]
    fn test_feet_inches_display() {
        let height = FeetInchesHeight::from_total_inches(74.0);
        assert_eq!(format!("{}", height), "6'2\"");
    }

    // =========================================================================
    // String Parsing Tests
    // =========================================================================

    #[test]
    fn test_unit_system_parsing() {
        assert_eq!("metric".parse::<UnitSystem>().unwrap(), UnitSystem::Metric);
        assert_eq!("Imperial".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
        assert_eq!(" lbs ".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
        assert!(matches!(
            "stones".parse::<UnitSystem>(),
            Err(EngineError::InvalidUnit(_))
        ));
    }

    #[test]
    fn test_unit_system_serde() {
        let json = serde_json::to_string(&UnitSystem::Imperial).unwrap();
        assert_eq!(json, "\"imperial\"");
        let parsed: UnitSystem = serde_json::from_str("\"metric\"").unwrap();
        assert_eq!(parsed, UnitSystem::Metric);
    }
}
