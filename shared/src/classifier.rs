//! BMI classification module
//!
//! Computes the Body Mass Index of a measurement and places it in one of six
//! ordered bands. Bands are left-inclusive and right-exclusive, so a BMI of
//! exactly 25.0 is Overweight. Classification always runs on the unrounded
//! value; rounding is a display concern handled by [`format_bmi`].
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: No state, no I/O, same input gives same output
//! 2. **Explicit Absence**: Missing or non-positive input yields `None`, never a category
//! 3. **NaN Safety**: A non-finite BMI is treated as absent rather than falling into the last band

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::units::UnitSystem;

/// Lower bound of the Normal band
pub const NORMAL_BMI_MIN: f64 = 18.5;

/// Upper (exclusive) bound of the Normal band
pub const NORMAL_BMI_MAX: f64 = 25.0;

/// Display color used when there is nothing to classify (slate)
pub const NEUTRAL_COLOR: &str = "#94A3B8";

/// Decimal places used for the headline BMI
pub const HEADLINE_PRECISION: usize = 2;

// ============================================================================
// Categories
// ============================================================================

/// BMI category classification, in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    #[serde(rename = "obese_1")]
    Obese1,
    #[serde(rename = "obese_2")]
    Obese2,
    #[serde(rename = "obese_3")]
    Obese3,
}

impl Category {
    /// Every category, lowest band first
    pub const ALL: [Category; 6] = [
        Category::Underweight,
        Category::Normal,
        Category::Overweight,
        Category::Obese1,
        Category::Obese2,
        Category::Obese3,
    ];

    /// Place a BMI value in its band.
    ///
    /// Thresholds are checked in ascending order. Returns `None` for NaN,
    /// which would otherwise fail every `<` test and land in Obese3.
    pub fn from_bmi(bmi: f64) -> Option<Category> {
        if bmi.is_nan() {
            return None;
        }
        let category = if bmi < 18.5 {
            Category::Underweight
        } else if bmi < 25.0 {
            Category::Normal
        } else if bmi < 30.0 {
            Category::Overweight
        } else if bmi < 35.0 {
            Category::Obese1
        } else if bmi < 40.0 {
            Category::Obese2
        } else {
            Category::Obese3
        };
        Some(category)
    }

    /// BMI band as `[lower, upper)`
    pub fn range(&self) -> (f64, f64) {
        match self {
            Category::Underweight => (0.0, 18.5),
            Category::Normal => (18.5, 25.0),
            Category::Overweight => (25.0, 30.0),
            Category::Obese1 => (30.0, 35.0),
            Category::Obese2 => (35.0, 40.0),
            Category::Obese3 => (40.0, f64::INFINITY),
        }
    }

    /// Stable tag, used as the localization key by the UI
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Underweight => "underweight",
            Category::Normal => "normal",
            Category::Overweight => "overweight",
            Category::Obese1 => "obese_1",
            Category::Obese2 => "obese_2",
            Category::Obese3 => "obese_3",
        }
    }

    /// English label, used when no translation is available
    pub fn description(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal Weight",
            Category::Overweight => "Overweight",
            Category::Obese1 => "Obesity I",
            Category::Obese2 => "Obesity II",
            Category::Obese3 => "Obesity III",
        }
    }

    /// Short health message shown under the result
    pub fn message(&self) -> &'static str {
        match self {
            Category::Underweight => {
                "Your BMI is below the healthy range. Consider consulting a specialist."
            }
            Category::Normal => "Excellent! You have a healthy weight. Keep up your good habits.",
            Category::Overweight => {
                "Your BMI indicates overweight. Small changes in diet and activity can help."
            }
            Category::Obese1 => {
                "Your BMI indicates grade I obesity. Take care of your cardiovascular health."
            }
            Category::Obese2 => {
                "Your BMI indicates grade II obesity. See a doctor for a personalized plan."
            }
            Category::Obese3 => {
                "Your BMI indicates morbid obesity. Seeking medical guidance is a priority."
            }
        }
    }

    /// Primary display color (hex)
    pub fn color(&self) -> &'static str {
        match self {
            Category::Underweight => "#60A5FA",
            Category::Normal => "#4ADE80",
            Category::Overweight => "#FACC15",
            Category::Obese1 => "#FB923C",
            Category::Obese2 => "#F87171",
            Category::Obese3 => "#EF4444",
        }
    }

    /// Glow/shadow color (hex)
    pub fn glow_color(&self) -> &'static str {
        match self {
            Category::Underweight => "#3b82f6",
            Category::Normal => "#22c55e",
            Category::Overweight => "#eab308",
            Category::Obese1 => "#f97316",
            Category::Obese2 => "#ef4444",
            Category::Obese3 => "#991b1b",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

// ============================================================================
// BMI Calculation
// ============================================================================

/// BMI classification result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// Unrounded BMI value
    pub value: f64,
    /// BMI category
    pub category: Category,
    /// Unit system of the weight fields below
    pub unit: UnitSystem,
    /// Weight range mapping to the Normal band at this height
    pub healthy_weight_range: (f64, f64),
    /// Distance from the healthy range (negative = under, positive = over, 0 = in range)
    pub distance_from_healthy: f64,
}

impl BmiResult {
    /// BMI rounded for the headline display
    pub fn rounded(&self) -> f64 {
        let factor = 10f64.powi(HEADLINE_PRECISION as i32);
        (self.value * factor).round() / factor
    }

    /// Headline text, e.g. `"22.86"`
    pub fn display_value(&self) -> String {
        format_bmi(self.value, HEADLINE_PRECISION)
    }
}

/// Calculate BMI from metric values
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify a measurement given in any unit system.
///
/// Returns `None` when either value is absent, zero, negative or NaN, or when
/// the resulting BMI is not finite.
pub fn classify(weight: Option<f64>, height: Option<f64>, unit: UnitSystem) -> Option<BmiResult> {
    let weight = weight.filter(|w| *w > 0.0)?;
    let height = height.filter(|h| *h > 0.0)?;

    let bmi = calculate_bmi(unit.to_metric_weight(weight), unit.to_metric_height(height));
    if !bmi.is_finite() {
        return None;
    }
    let category = Category::from_bmi(bmi)?;

    let healthy = healthy_weight_range(height, unit);
    let distance = if weight < healthy.0 {
        weight - healthy.0
    } else if weight > healthy.1 {
        weight - healthy.1
    } else {
        0.0
    };

    Some(BmiResult {
        value: bmi,
        category,
        unit,
        healthy_weight_range: healthy,
        distance_from_healthy: distance,
    })
}

/// Weight range that maps to the Normal band for a height, in the height's unit system
pub fn healthy_weight_range(height: f64, unit: UnitSystem) -> (f64, f64) {
    let height_m = unit.to_metric_height(height) / 100.0;
    let height_m_sq = height_m * height_m;
    (
        unit.from_metric_weight(NORMAL_BMI_MIN * height_m_sq),
        unit.from_metric_weight(NORMAL_BMI_MAX * height_m_sq),
    )
}

/// Format a BMI value with a fixed number of decimals
pub fn format_bmi(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// Display color for an optional result, neutral when absent
pub fn display_color(result: Option<&BmiResult>) -> &'static str {
    result.map_or(NEUTRAL_COLOR, |r| r.category.color())
}

/// Glow color for an optional result, neutral when absent
pub fn display_glow_color(result: Option<&BmiResult>) -> &'static str {
    result.map_or(NEUTRAL_COLOR, |r| r.category.glow_color())
}

// ============================================================================
// Silhouette Scaling
// ============================================================================

/// Height (cm) at which the reference figure has scale 1
pub const SILHOUETTE_REFERENCE_HEIGHT_CM: f64 = 135.0;

/// BMI at which the reference figure has width scale 1 (175 cm / 70 kg)
pub const SILHOUETTE_REFERENCE_BMI: f64 = 22.85;

/// Scale factors for the figure drawn in visual mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SilhouetteScale {
    pub width_scale: f64,
    pub height_scale: f64,
}

/// Figure scale for a measurement; width follows BMI, height follows stature
pub fn silhouette_scale(weight: Option<f64>, height: Option<f64>, unit: UnitSystem) -> Option<SilhouetteScale> {
    let result = classify(weight, height, unit)?;
    let height_cm = unit.to_metric_height(height?);
    Some(SilhouetteScale {
        width_scale: result.value / SILHOUETTE_REFERENCE_BMI,
        height_scale: height_cm / SILHOUETTE_REFERENCE_HEIGHT_CM,
    })
}
