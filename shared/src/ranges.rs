//! Slider and table range calculations
//!
//! Derives the minimum, maximum and step of the weight and height axes.
//! Adults get fixed bounds per unit system. Children get bounds from a rough
//! age-based formula.
//!
//! The child formulas are heuristics and are NOT medically validated growth
//! curves. They only pick a sensible window for the sliders and the reference
//! table; a real percentile mode needs WHO/CDC tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::errors::EngineError;
use crate::units::{UnitSystem, CM_PER_INCH};

/// Youngest age accepted by child mode
pub const MIN_CHILD_AGE: i32 = 2;

/// Oldest age accepted by child mode
pub const MAX_CHILD_AGE: i32 = 20;

/// Pound factor used by the child heuristic (coarser than the converter's)
const CHILD_LBS_PER_KG: f64 = 2.2;

// ============================================================================
// Calculator Mode
// ============================================================================

/// Which population the ranges are tuned for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorMode {
    #[default]
    Adult,
    /// Pediatric placeholder, see module docs
    Child,
}

impl CalculatorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorMode::Adult => "adult",
            CalculatorMode::Child => "child",
        }
    }
}

impl fmt::Display for CalculatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CalculatorMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "adult" => Ok(CalculatorMode::Adult),
            "child" | "kid" | "pediatric" => Ok(CalculatorMode::Child),
            _ => Err(EngineError::InvalidMode(s.to_string())),
        }
    }
}

// ============================================================================
// Range Spec
// ============================================================================

/// Axis bounds in the active unit system's native scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSpec {
    pub w_min: f64,
    pub w_max: f64,
    pub w_step: f64,
    pub h_min: f64,
    pub h_max: f64,
    pub h_step: f64,
}

impl RangeSpec {
    /// Adult bounds for kilograms and centimeters
    pub const ADULT_METRIC: RangeSpec = RangeSpec {
        w_min: 40.0,
        w_max: 160.0,
        w_step: 5.0,
        h_min: 140.0,
        h_max: 220.0,
        h_step: 5.0,
    };

    /// Adult bounds for pounds and inches
    pub const ADULT_IMPERIAL: RangeSpec = RangeSpec {
        w_min: 90.0,
        w_max: 350.0,
        w_step: 10.0,
        h_min: 55.0,
        h_max: 87.0,
        h_step: 2.0,
    };

    /// Adult bounds for a unit system
    pub fn adult(unit: UnitSystem) -> Self {
        match unit {
            UnitSystem::Metric => Self::ADULT_METRIC,
            UnitSystem::Imperial => Self::ADULT_IMPERIAL,
        }
    }

    /// Replace each bound the override carries, keep the rest
    pub fn with_overrides(self, overrides: &RangeOverride) -> Self {
        Self {
            w_min: overrides.w_min.unwrap_or(self.w_min),
            w_max: overrides.w_max.unwrap_or(self.w_max),
            w_step: overrides.w_step.unwrap_or(self.w_step),
            h_min: overrides.h_min.unwrap_or(self.h_min),
            h_max: overrides.h_max.unwrap_or(self.h_max),
            h_step: overrides.h_step.unwrap_or(self.h_step),
        }
    }

    /// Both axes ordered and both steps positive
    pub fn is_valid(&self) -> bool {
        self.w_min <= self.w_max && self.h_min <= self.h_max && self.w_step > 0.0 && self.h_step > 0.0
    }
}

/// Per-bound user overrides; absent fields keep the computed default
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct RangeOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub w_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub w_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub w_step: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub h_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub h_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub h_step: Option<f64>,
}

impl RangeOverride {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ============================================================================
// Range Computation
// ============================================================================

/// Whether an age can drive the child heuristic
pub fn is_valid_child_age(age: i32) -> bool {
    (MIN_CHILD_AGE..=MAX_CHILD_AGE).contains(&age)
}

/// Child bounds for a valid age, `None` otherwise
///
/// Computed in metric, then converted:
/// - height: 70 + 3.5·age .. 100 + 6.5·age (cm)
/// - weight: 8 + 1.5·age .. 20 + 6·age (kg)
pub fn child_ranges(unit: UnitSystem, age: i32) -> Option<RangeSpec> {
    if !is_valid_child_age(age) {
        return None;
    }
    let age = age as f64;
    let h_min_cm = 70.0 + age * 3.5;
    let h_max_cm = 100.0 + age * 6.5;
    let w_min_kg = 8.0 + age * 1.5;
    let w_max_kg = 20.0 + age * 6.0;

    let spec = match unit {
        UnitSystem::Metric => RangeSpec {
            w_min: w_min_kg.floor(),
            w_max: w_max_kg.ceil(),
            w_step: 5.0,
            h_min: h_min_cm.floor(),
            h_max: h_max_cm.ceil(),
            h_step: 5.0,
        },
        UnitSystem::Imperial => RangeSpec {
            w_min: (w_min_kg * CHILD_LBS_PER_KG).floor(),
            w_max: (w_max_kg * CHILD_LBS_PER_KG).ceil(),
            w_step: 10.0,
            h_min: (h_min_cm / CM_PER_INCH).floor(),
            h_max: (h_max_cm / CM_PER_INCH).ceil(),
            h_step: 2.0,
        },
    };
    Some(spec)
}

/// Default bounds for a unit system, mode and optional age.
///
/// Child mode with a missing or out-of-range age falls back to adult bounds.
pub fn compute_ranges(unit: UnitSystem, mode: CalculatorMode, age: Option<i32>) -> RangeSpec {
    match (mode, age) {
        (CalculatorMode::Child, Some(age)) => {
            child_ranges(unit, age).unwrap_or_else(|| RangeSpec::adult(unit))
        }
        _ => RangeSpec::adult(unit),
    }
}

/// Default bounds with user overrides applied on top
pub fn resolve_ranges(
    unit: UnitSystem,
    mode: CalculatorMode,
    age: Option<i32>,
    overrides: &RangeOverride,
) -> RangeSpec {
    compute_ranges(unit, mode, age).with_overrides(overrides)
}
