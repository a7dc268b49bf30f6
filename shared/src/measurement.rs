//! The user's current measurement

use serde::{Deserialize, Serialize};

use crate::classifier::{classify, BmiResult};
use crate::errors::EngineResult;
use crate::input::parse_numeric_input;
use crate::units::{convert_height, convert_weight, UnitSystem};

/// Weight and height in one unit system; either may be missing while the user types
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurement {
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub unit: UnitSystem,
}

impl Measurement {
    pub fn new(weight: Option<f64>, height: Option<f64>, unit: UnitSystem) -> Self {
        Self { weight, height, unit }
    }

    /// Build from raw field text, see [`parse_numeric_input`]
    pub fn from_text(weight: &str, height: &str, unit: UnitSystem) -> EngineResult<Self> {
        Ok(Self {
            weight: parse_numeric_input(weight)?,
            height: parse_numeric_input(height)?,
            unit,
        })
    }

    pub fn classify(&self) -> Option<BmiResult> {
        classify(self.weight, self.height, self.unit)
    }

    /// Re-express in another unit system, rounded to one decimal like the entry fields
    pub fn to_unit(&self, unit: UnitSystem) -> Self {
        if unit == self.unit {
            return *self;
        }
        let round1 = |v: f64| (v * 10.0).round() / 10.0;
        Self {
            weight: self.weight.map(|w| round1(convert_weight(w, self.unit, unit))),
            height: self.height.map(|h| round1(convert_height(h, self.unit, unit))),
            unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text() {
        let m = Measurement::from_text("70,5", "175", UnitSystem::Metric).unwrap();
        assert_eq!(m.weight, Some(70.5));
        assert_eq!(m.height, Some(175.0));

        let partial = Measurement::from_text("", "175", UnitSystem::Metric).unwrap();
        assert_eq!(partial.weight, None);
        assert!(partial.classify().is_none());

        assert!(Measurement::from_text("heavy", "175", UnitSystem::Metric).is_err());
    }

    #[test]
    fn test_to_unit_keeps_bmi() {
        let metric = Measurement::new(Some(70.0), Some(175.0), UnitSystem::Metric);
        let imperial = metric.to_unit(UnitSystem::Imperial);
        assert_eq!(imperial.weight, Some(154.3));
        assert_eq!(imperial.height, Some(68.9));

        let before = metric.classify().unwrap();
        let after = imperial.classify().unwrap();
        assert!((before.value - after.value).abs() < 0.1);
        assert_eq!(before.category, after.category);
    }

    #[test]
    fn test_to_unit_keeps_missing_values() {
        let m = Measurement::new(None, Some(69.0), UnitSystem::Imperial).to_unit(UnitSystem::Metric);
        assert_eq!(m.weight, None);
        assert_eq!(m.height, Some(175.3));
        assert_eq!(m.unit, UnitSystem::Metric);
    }
}
