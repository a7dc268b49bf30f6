//! Output rendering
//!
//! Text output is meant for a terminal; JSON output is the serialized
//! engine types, unchanged.

use indexmass_shared::{
    classifier::{format_bmi, SilhouetteScale},
    BmiReport, BmiResult, CalculatorMode, FeetInchesHeight, Measurement, Preferences, RangeSpec,
    ReferenceTable, UnitSystem,
};
use serde::Serialize;
use std::fmt::Write;

use crate::error::CliResult;

/// Width of one reference table column
const COLUMN_WIDTH: usize = 7;

/// Pretty-printed JSON for any engine value
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Number without needless trailing zeros: `70`, `68.9`, `22.75`
pub fn format_number(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

fn format_height(height: f64, unit: UnitSystem) -> String {
    match unit {
        UnitSystem::Metric => format!("{} cm", format_number(height)),
        UnitSystem::Imperial => format!(
            "{} in ({})",
            format_number(height),
            FeetInchesHeight::from_total_inches(height)
        ),
    }
}

fn format_optional(value: Option<f64>, suffix: &str) -> String {
    match value {
        Some(v) => format!("{} {}", format_number(v), suffix),
        None => "-".to_string(),
    }
}

/// Headline result for a measurement
pub fn render_classification(measurement: &Measurement, result: Option<&BmiResult>, precision: usize) -> String {
    let unit = measurement.unit;
    let mut out = String::new();

    let height = measurement
        .height
        .map_or_else(|| "-".to_string(), |h| format_height(h, unit));
    let _ = writeln!(
        out,
        "Weight: {}  Height: {}",
        format_optional(measurement.weight, unit.weight_abbreviation()),
        height
    );

    match result {
        Some(result) => {
            let _ = writeln!(
                out,
                "BMI: {} ({})",
                format_bmi(result.value, precision),
                result.category
            );
            let (low, high) = result.healthy_weight_range;
            let _ = writeln!(
                out,
                "Healthy weight: {:.1} - {:.1} {}",
                low,
                high,
                unit.weight_abbreviation()
            );
            if result.distance_from_healthy != 0.0 {
                let _ = writeln!(
                    out,
                    "Distance from healthy range: {:+.1} {}",
                    result.distance_from_healthy,
                    unit.weight_abbreviation()
                );
            }
            let _ = writeln!(out, "{}", result.category.message());
        }
        None => {
            let _ = writeln!(out, "BMI: -");
            let _ = writeln!(out, "Enter a weight and a height to calculate.");
        }
    }
    out
}

/// Axis bounds for the sliders and the table
pub fn render_ranges(spec: &RangeSpec, unit: UnitSystem, mode: CalculatorMode, age: Option<i32>) -> String {
    let mut out = String::new();
    let _ = match (mode, age) {
        (CalculatorMode::Child, Some(age)) => writeln!(out, "Mode: child (age {}), {}", age, unit),
        _ => writeln!(out, "Mode: {}, {}", mode, unit),
    };
    let _ = writeln!(
        out,
        "Weight: {} - {} {} (step {})",
        format_number(spec.w_min),
        format_number(spec.w_max),
        unit.weight_abbreviation(),
        format_number(spec.w_step)
    );
    let _ = writeln!(
        out,
        "Height: {} - {} {} (step {})",
        format_number(spec.h_min),
        format_number(spec.h_max),
        unit.height_abbreviation(),
        format_number(spec.h_step)
    );
    out
}

/// Grid with heights down the side and weights across the top.
///
/// The highlighted cell is bracketed and its row is marked with `>`.
pub fn render_table(table: &ReferenceTable) -> String {
    if table.is_empty() {
        return "Reference table is empty for this range.\n".to_string();
    }

    let mut out = String::new();
    let corner = format!(
        "{} \\ {}",
        table.unit.height_abbreviation(),
        table.unit.weight_abbreviation()
    );
    let _ = write!(out, "  {:>w$} |", corner, w = COLUMN_WIDTH);
    for weight in &table.weights {
        let _ = write!(out, "{:>w$}", format_number(*weight), w = COLUMN_WIDTH);
    }
    out.push('\n');

    for row in &table.rows {
        let marker = if row.highlighted { '>' } else { ' ' };
        let _ = write!(out, "{} {:>w$} |", marker, format_number(row.height), w = COLUMN_WIDTH);
        for cell in &row.cells {
            let label = if cell.highlighted {
                format!("[{}]", cell.label)
            } else {
                cell.label.clone()
            };
            let _ = write!(out, "{:>w$}", label, w = COLUMN_WIDTH);
        }
        out.push('\n');
    }
    out
}

fn render_silhouette(scale: &SilhouetteScale) -> String {
    format!(
        "Figure scale: width {:.2}, height {:.2}\n",
        scale.width_scale, scale.height_scale
    )
}

/// Everything at once: headline, ranges, figure scale and table
pub fn render_report(report: &BmiReport, preferences: &Preferences, precision: usize) -> String {
    let mut out = render_classification(&report.measurement, report.bmi.as_ref(), precision);
    out.push('\n');
    out.push_str(&render_ranges(
        &report.ranges,
        report.measurement.unit,
        preferences.mode,
        preferences.age,
    ));
    if let Some(scale) = &report.silhouette {
        out.push_str(&render_silhouette(scale));
    }
    out.push('\n');
    out.push_str(&render_table(&report.table));
    out
}

/// Preferences in the same TOML shape they are saved in
pub fn render_preferences(preferences: &Preferences) -> CliResult<String> {
    Ok(toml::to_string_pretty(preferences)?)
}
