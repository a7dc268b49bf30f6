//! Reference table highlighting
//!
//! Marks the row, column and cell matching the user's measurement. Values
//! outside the table are clamped to the nearest edge so something is always
//! highlighted while a measurement exists.

use serde::{Deserialize, Serialize};

use crate::ranges::RangeSpec;
use crate::table::round_tick;

/// Row/column to emphasize, in the table's unit system
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Highlight {
    pub weight: Option<f64>,
    pub height: Option<f64>,
}

impl Highlight {
    /// Nothing highlighted
    pub const NONE: Highlight = Highlight {
        weight: None,
        height: None,
    };

    pub fn is_active(&self) -> bool {
        self.weight.is_some() && self.height.is_some()
    }

    /// Exact match on the snapped axis values
    pub fn is_highlighted_cell(&self, weight: f64, height: f64) -> bool {
        self.is_highlighted_column(weight) && self.is_highlighted_row(height)
    }

    pub fn is_highlighted_row(&self, height: f64) -> bool {
        self.height == Some(height)
    }

    pub fn is_highlighted_column(&self, weight: f64) -> bool {
        self.weight == Some(weight)
    }
}

/// Bound a value to `[min, max]` without panicking on inverted bounds
fn clamp_to(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Clamp the live measurement into the table range.
///
/// Both outputs are absent unless both inputs are present. Each axis is
/// clamped independently and snapped with the same rounding the axis
/// generator uses, so equality against axis ticks is exact.
pub fn resolve(live_weight: Option<f64>, live_height: Option<f64>, range: &RangeSpec) -> Highlight {
    match (present(live_weight), present(live_height)) {
        (Some(weight), Some(height)) => Highlight {
            weight: Some(round_tick(clamp_to(weight, range.w_min, range.w_max))),
            height: Some(round_tick(clamp_to(height, range.h_min, range.h_max))),
        },
        _ => Highlight::NONE,
    }
}
