//! Reference table generation
//!
//! Builds the weight columns and height rows of the BMI reference table and
//! fills every cell. The user's own value is spliced into each axis so the
//! table always has an exact row and column for it.

use serde::{Deserialize, Serialize};

use crate::classifier::Category;
use crate::highlight::Highlight;
use crate::ranges::RangeSpec;
use crate::units::UnitSystem;

/// Slack added to the upper bound to absorb float drift
pub const AXIS_EPSILON: f64 = 1e-4;

/// Most ticks one axis may hold; larger axes come back empty
pub const MAX_AXIS_TICKS: usize = 2_000;

/// Decimal places shown in table cells
pub const CELL_PRECISION: usize = 1;

/// Marker for cells without a value
pub const NO_VALUE: &str = "-";

/// Imperial BMI factor (lb/in² to kg/m²)
pub const IMPERIAL_BMI_FACTOR: f64 = 703.0;

/// Round a tick to 2 decimal places
pub fn round_tick(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// Axis Generation
// ============================================================================

/// Ordered, duplicate-free ticks from `min` to `max` by `step`.
///
/// Returns an empty axis for inverted bounds, a non-positive step,
/// non-finite input or a step so small the axis would exceed
/// [`MAX_AXIS_TICKS`]. A finite `live_value` inside `[min, max]` is inserted
/// in sorted position unless an equal tick (after rounding) already exists.
pub fn build_axis(min: f64, max: f64, step: f64, live_value: Option<f64>) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite() && step.is_finite()) || step <= 0.0 || min > max {
        return Vec::new();
    }

    let limit = max + AXIS_EPSILON;
    let count = ((limit - min) / step).floor() + 1.0;
    if count > MAX_AXIS_TICKS as f64 {
        return Vec::new();
    }

    let mut ticks: Vec<f64> = Vec::with_capacity(count as usize + 1);
    let mut index = 0usize;
    loop {
        let raw = min + index as f64 * step;
        if raw > limit {
            break;
        }
        let tick = round_tick(raw);
        if ticks.last() != Some(&tick) {
            ticks.push(tick);
        }
        index += 1;
    }

    if let Some(live) = live_value.filter(|v| v.is_finite() && *v >= min && *v <= max) {
        let live = round_tick(live);
        if !ticks.contains(&live) {
            ticks.push(live);
            ticks.sort_by(f64::total_cmp);
        }
    }

    ticks
}

// ============================================================================
// Cells
// ============================================================================

/// BMI for one table cell, `None` when the height cannot divide
pub fn cell_bmi(weight: f64, height: f64, unit: UnitSystem) -> Option<f64> {
    if height.is_nan() || height <= 0.0 {
        return None;
    }
    let bmi = match unit {
        UnitSystem::Metric => {
            let height_m = height / 100.0;
            weight / (height_m * height_m)
        }
        UnitSystem::Imperial => IMPERIAL_BMI_FACTOR * weight / (height * height),
    };
    Some(bmi)
}

/// Cell text: one decimal, or [`NO_VALUE`]
pub fn format_cell(bmi: Option<f64>) -> String {
    match bmi {
        Some(value) => format!("{:.*}", CELL_PRECISION, value),
        None => NO_VALUE.to_string(),
    }
}

/// One (height, weight) cell of the reference table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    pub weight: f64,
    pub height: f64,
    pub bmi: Option<f64>,
    pub label: String,
    pub category: Option<Category>,
    pub highlighted: bool,
}

/// One height row of the reference table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub height: f64,
    pub highlighted: bool,
    pub cells: Vec<TableCell>,
}

/// Fill every (height, weight) pair, marking the highlighted ones
pub fn build_grid(weights: &[f64], heights: &[f64], unit: UnitSystem, highlight: &Highlight) -> Vec<TableRow> {
    heights
        .iter()
        .map(|&height| TableRow {
            height,
            highlighted: highlight.is_highlighted_row(height),
            cells: weights
                .iter()
                .map(|&weight| {
                    let bmi = cell_bmi(weight, height, unit);
                    TableCell {
                        weight,
                        height,
                        bmi,
                        label: format_cell(bmi),
                        category: bmi.and_then(Category::from_bmi),
                        highlighted: highlight.is_highlighted_cell(weight, height),
                    }
                })
                .collect(),
        })
        .collect()
}

// ============================================================================
// Reference Table
// ============================================================================

/// Complete reference table for one range and measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTable {
    pub unit: UnitSystem,
    pub weights: Vec<f64>,
    pub heights: Vec<f64>,
    pub highlight: Highlight,
    pub rows: Vec<TableRow>,
}

impl ReferenceTable {
    /// Build the axes and the grid.
    ///
    /// The clamped highlight values are spliced into the axes, so an
    /// out-of-range measurement still lands on an edge row and column.
    pub fn build(range: &RangeSpec, unit: UnitSystem, highlight: Highlight) -> Self {
        let weights = build_axis(range.w_min, range.w_max, range.w_step, highlight.weight);
        let heights = build_axis(range.h_min, range.h_max, range.h_step, highlight.height);
        let rows = build_grid(&weights, &heights, unit, &highlight);
        Self {
            unit,
            weights,
            heights,
            highlight,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty() || self.heights.is_empty()
    }

    /// Look up a cell by its axis values
    pub fn cell(&self, weight: f64, height: f64) -> Option<&TableCell> {
        self.rows
            .iter()
            .find(|row| row.height == height)?
            .cells
            .iter()
            .find(|cell| cell.weight == weight)
    }

    pub fn highlighted_cell(&self) -> Option<&TableCell> {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .find(|cell| cell.highlighted)
    }
}
