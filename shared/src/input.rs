//! Input normalization adapter
//!
//! Turns raw text from number fields into validated numbers before anything
//! reaches the calculator. Mirrors what the entry widgets do while typing
//! (decimal comma, leading zeros) and when the field loses focus (clamping
//! to the entry limits).

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, EngineResult};
use crate::units::UnitSystem;

/// Heaviest weight accepted by the entry field (kg)
pub const MAX_WEIGHT_KG: f64 = 650.0;

/// Tallest height accepted by the entry field (cm)
pub const MAX_HEIGHT_CM: f64 = 272.0;

const NUMERIC_PATTERN: &str = r"^(\d+\.?\d*|\.\d+)$";

// ============================================================================
// Text Normalization
// ============================================================================

/// Clean up text typed into a numeric field.
///
/// Trims whitespace, accepts a decimal comma and strips leading zeros unless
/// the value is a fraction such as `0.5`.
pub fn normalize_numeric_text(raw: &str) -> String {
    let value = raw.trim().replace(',', ".");
    if value.len() > 1 && value.starts_with('0') && !value[1..].starts_with('.') {
        value.trim_start_matches('0').to_string()
    } else {
        value
    }
}

/// Parse a numeric field.
///
/// Empty text means "no value yet" and yields `Ok(None)`. Anything that is
/// not a plain non-negative decimal is rejected.
pub fn parse_numeric_input(raw: &str) -> EngineResult<Option<f64>> {
    let value = normalize_numeric_text(raw);
    if value.is_empty() {
        return Ok(None);
    }

    let pattern = Regex::new(NUMERIC_PATTERN)
        .map_err(|e| EngineError::Validation(format!("numeric pattern: {}", e)))?;
    if !pattern.is_match(&value) {
        return Err(EngineError::InvalidNumber(raw.to_string()));
    }

    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or_else(|| EngineError::InvalidNumber(raw.to_string()))
}

// ============================================================================
// Entry Limits
// ============================================================================

/// Inclusive bounds for one entry field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputLimits {
    pub min: f64,
    pub max: f64,
}

impl InputLimits {
    /// Weight field limits in the unit system's scale
    pub fn weight(unit: UnitSystem) -> Self {
        Self {
            min: 0.0,
            max: unit.from_metric_weight(MAX_WEIGHT_KG).ceil(),
        }
    }

    /// Height field limits in the unit system's scale
    pub fn height(unit: UnitSystem) -> Self {
        Self {
            min: 0.0,
            max: unit.from_metric_height(MAX_HEIGHT_CM).ceil(),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Value a field settles on when it loses focus.
///
/// A missing, NaN or too-small value becomes the minimum; a too-large value
/// becomes the maximum.
pub fn commit_value(value: Option<f64>, limits: InputLimits) -> f64 {
    match value {
        Some(v) if v.is_nan() || v < limits.min => limits.min,
        Some(v) if v > limits.max => limits.max,
        Some(v) => v,
        None => limits.min,
    }
}
