//! Client preferences
//!
//! Everything the calculator remembers between sessions: the last
//! measurement, the unit system and the calculator configuration. The
//! record is passed explicitly into the engine; nothing here is global.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{EngineError, EngineResult};
use crate::measurement::Measurement;
use crate::ranges::{resolve_ranges, CalculatorMode, RangeOverride, RangeSpec};
use crate::units::UnitSystem;

/// Default interface language
pub const DEFAULT_LANGUAGE: &str = "es";

/// Biological sex, kept for the pediatric mode configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    #[default]
    Male,
    Female,
}

impl std::str::FromStr for BiologicalSex {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(BiologicalSex::Male),
            "female" | "f" => Ok(BiologicalSex::Female),
            _ => Err(EngineError::Validation(format!("Unknown biological sex: {}", s))),
        }
    }
}

/// Persisted client preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Preferences {
    pub unit: UnitSystem,
    pub mode: CalculatorMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 2, max = 20, message = "age must be between 2 and 20"))]
    pub age: Option<i32>,
    pub gender: BiologicalSex,
    #[validate(length(min = 2, max = 8, message = "language must be a short language code"))]
    pub language: String,
    /// Absent in a stored record means the field was cleared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "weight must not be negative"))]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "height must not be negative"))]
    pub height: Option<f64>,
    #[validate(nested)]
    pub ranges: RangeOverride,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            unit: UnitSystem::Metric,
            mode: CalculatorMode::Adult,
            age: None,
            gender: BiologicalSex::Male,
            language: DEFAULT_LANGUAGE.to_string(),
            weight: Some(70.0),
            height: Some(175.0),
            ranges: RangeOverride::default(),
        }
    }
}

impl Preferences {
    /// Run field validation, returning the record on success
    pub fn validated(self) -> EngineResult<Self> {
        self.validate()?;
        Ok(self)
    }

    pub fn measurement(&self) -> Measurement {
        Measurement::new(self.weight, self.height, self.unit)
    }

    /// Axis bounds for the current unit, mode and age, with overrides applied
    pub fn range_spec(&self) -> RangeSpec {
        resolve_ranges(self.unit, self.mode, self.age, &self.ranges)
    }

    /// Change unit system, converting the stored measurement.
    ///
    /// Range overrides are expressed in the old unit's scale, so they are dropped.
    pub fn switch_unit(&mut self, unit: UnitSystem) {
        if unit == self.unit {
            return;
        }
        let converted = self.measurement().to_unit(unit);
        self.weight = converted.weight;
        self.height = converted.height;
        self.unit = unit;
        self.ranges = RangeOverride::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences() {
        let prefs = Preferences::default();
        assert_eq!(prefs.unit, UnitSystem::Metric);
        assert_eq!(prefs.mode, CalculatorMode::Adult);
        assert_eq!(prefs.language, "es");
        assert_eq!(prefs.range_spec(), RangeSpec::ADULT_METRIC);
        assert!(prefs.validated().is_ok());
    }

    #[test]
    fn test_child_preferences_range() {
        let prefs = Preferences {
            mode: CalculatorMode::Child,
            age: Some(10),
            ..Default::default()
        };
        let spec = prefs.range_spec();
        assert_eq!((spec.h_min, spec.h_max), (105.0, 165.0));
    }

    #[test]
    fn test_validation_rejects_bad_age() {
        let prefs = Preferences {
            mode: CalculatorMode::Child,
            age: Some(25),
            ..Default::default()
        };
        assert!(matches!(prefs.validated(), Err(EngineError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_bad_override() {
        let prefs = Preferences {
            ranges: RangeOverride {
                w_step: Some(-1.0),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(prefs.validated().is_err());
    }

    #[test]
    fn test_switch_unit() {
        let mut prefs = Preferences {
            ranges: RangeOverride {
                w_max: Some(200.0),
                ..Default::default()
            },
            ..Default::default()
        };
        prefs.switch_unit(UnitSystem::Imperial);
        assert_eq!(prefs.unit, UnitSystem::Imperial);
        assert_eq!(prefs.weight, Some(154.3));
        assert_eq!(prefs.height, Some(68.9));
        assert!(prefs.ranges.is_empty());
        assert_eq!(prefs.range_spec(), RangeSpec::ADULT_IMPERIAL);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"unit":"imperial","age":8}"#).unwrap();
        assert_eq!(prefs.unit, UnitSystem::Imperial);
        assert_eq!(prefs.age, Some(8));
        assert_eq!(prefs.language, "es");
    }

    #[test]
    fn test_missing_measurement_stays_cleared() {
        let prefs: Preferences = serde_json::from_str(r#"{"height":180.0}"#).unwrap();
        assert_eq!(prefs.weight, None);
        assert_eq!(prefs.height, Some(180.0));

        let cleared = Preferences {
            weight: None,
            ..Default::default()
        };
        let json = serde_json::to_string(&cleared).unwrap();
        let back: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cleared);
    }
}
