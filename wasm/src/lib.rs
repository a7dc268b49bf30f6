//! IndexMass WASM Module
//!
//! WebAssembly bindings that let the browser UI run the BMI engine.
//! Numbers cross the boundary as plain `f64`; structured results cross as
//! JSON strings so the JS side can keep its own view models.

use indexmass_shared::{
    build_axis as engine_build_axis, cell_bmi, compute_ranges,
    input::{commit_value, InputLimits},
    table::format_cell,
    BmiReport, CalculatorMode, EngineError, Measurement, Preferences, RangeSpec, UnitSystem,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_js_error(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
}

fn parse_unit(unit: &str) -> Result<UnitSystem, JsValue> {
    unit.parse::<UnitSystem>().map_err(to_js_error)
}

/// Calculate BMI from weight (kg) and height (cm), 0 when height is not positive
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm.is_nan() || height_cm <= 0.0 {
        return 0.0;
    }
    indexmass_shared::classifier::calculate_bmi(weight_kg, height_cm)
}

/// Entry limits of the weight field as JSON `{min, max}`
#[wasm_bindgen]
pub fn weight_limits(unit: &str) -> Result<String, JsValue> {
    to_json(&InputLimits::weight(parse_unit(unit)?))
}

/// Entry limits of the height field as JSON `{min, max}`
#[wasm_bindgen]
pub fn height_limits(unit: &str) -> Result<String, JsValue> {
    to_json(&InputLimits::height(parse_unit(unit)?))
}

/// Value the weight field settles on when it loses focus
#[wasm_bindgen]
pub fn commit_weight(value: Option<f64>, unit: &str) -> Result<f64, JsValue> {
    Ok(commit_value(value, InputLimits::weight(parse_unit(unit)?)))
}

/// Value the height field settles on when it loses focus
#[wasm_bindgen]
pub fn commit_height(value: Option<f64>, unit: &str) -> Result<f64, JsValue> {
    Ok(commit_value(value, InputLimits::height(parse_unit(unit)?)))
}

/// Classify raw field text. Returns JSON `BmiResult` or `null` when there is nothing to classify
#[wasm_bindgen]
pub fn classify_input(weight: &str, height: &str, unit: &str) -> Result<String, JsValue> {
    let unit = parse_unit(unit)?;
    let measurement = Measurement::from_text(weight, height, unit).map_err(to_js_error)?;
    to_json(&measurement.classify())
}

/// Axis bounds for a unit system, mode and age as JSON `RangeSpec`
#[wasm_bindgen]
pub fn slider_ranges(unit: &str, mode: &str, age: Option<i32>) -> Result<String, JsValue> {
    let unit = parse_unit(unit)?;
    let mode = mode.parse::<CalculatorMode>().map_err(to_js_error)?;
    to_json(&compute_ranges(unit, mode, age))
}

/// Axis ticks from `min` to `max`, with the live value spliced in
#[wasm_bindgen]
pub fn build_axis(min: f64, max: f64, step: f64, live_value: Option<f64>) -> Vec<f64> {
    engine_build_axis(min, max, step, live_value)
}

/// Table cell text for one (weight, height) pair
#[wasm_bindgen]
pub fn cell_label(weight: f64, height: f64, unit: &str) -> Result<String, JsValue> {
    let unit = parse_unit(unit)?;
    Ok(format_cell(cell_bmi(weight, height, unit)))
}

/// Full report for a JSON preference record.
///
/// Missing settings use defaults; a missing weight or height is treated as cleared.
#[wasm_bindgen]
pub fn compute_report(preferences_json: &str) -> Result<String, JsValue> {
    let preferences: Preferences = serde_json::from_str(preferences_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse preferences JSON: {}", e)))?;
    let preferences = preferences.validated().map_err(to_js_error)?;
    to_json(&BmiReport::compute(&preferences))
}

/// Full report for explicit values and a JSON `RangeSpec`
#[wasm_bindgen]
pub fn compute_report_for(
    weight: Option<f64>,
    height: Option<f64>,
    unit: &str,
    ranges_json: &str,
) -> Result<String, JsValue> {
    let unit = parse_unit(unit)?;
    let ranges: RangeSpec = serde_json::from_str(ranges_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse ranges JSON: {}", e)))?;
    let report = BmiReport::for_measurement(Measurement::new(weight, height, unit), ranges);
    to_json(&report)
}

/// Switch a JSON preference record to another unit system, returning the updated record
#[wasm_bindgen]
pub fn switch_unit(preferences_json: &str, unit: &str) -> Result<String, JsValue> {
    let mut preferences: Preferences = serde_json::from_str(preferences_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse preferences JSON: {}", e)))?;
    preferences.switch_unit(parse_unit(unit)?);
    to_json(&preferences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_bmi() {
        let bmi = calculate_bmi(70.0, 175.0);
        assert!((bmi - 22.86).abs() < 0.01);
        assert_eq!(calculate_bmi(70.0, 0.0), 0.0);
        assert_eq!(calculate_bmi(70.0, f64::NAN), 0.0);
    }

    #[test]
    fn test_entry_limits() {
        let json: Value = serde_json::from_str(&weight_limits("metric").unwrap()).unwrap();
        assert_eq!(json["max"], 650.0);
        let json: Value = serde_json::from_str(&height_limits("imperial").unwrap()).unwrap();
        assert_eq!(json["max"], 108.0);
    }

    #[test]
    fn test_commit_values() {
        assert_eq!(commit_weight(Some(99999.0), "metric").unwrap(), 650.0);
        assert_eq!(commit_weight(Some(f64::NAN), "metric").unwrap(), 0.0);
        assert_eq!(commit_height(Some(180.0), "metric").unwrap(), 180.0);
        assert_eq!(commit_height(None, "imperial").unwrap(), 0.0);
    }

    #[test]
    fn test_classify_input() {
        let json: Value = serde_json::from_str(&classify_input("154", "69", "imperial").unwrap()).unwrap();
        assert_eq!(json["category"], "normal");

        let empty = classify_input("", "175", "metric").unwrap();
        assert_eq!(empty, "null");
    }

    #[test]
    fn test_slider_ranges() {
        let json: Value = serde_json::from_str(&slider_ranges("metric", "child", Some(10)).unwrap()).unwrap();
        assert_eq!(json["h_min"], 105.0);
        assert_eq!(json["w_max"], 80.0);
    }

    #[test]
    fn test_build_axis() {
        let axis = build_axis(40.0, 60.0, 5.0, Some(47.0));
        assert_eq!(axis, vec![40.0, 45.0, 47.0, 50.0, 55.0, 60.0]);
        assert!(build_axis(200.0, 100.0, 5.0, None).is_empty());
    }

    #[test]
    fn test_cell_label() {
        assert_eq!(cell_label(70.0, 175.0, "metric").unwrap(), "22.9");
        assert_eq!(cell_label(70.0, 0.0, "metric").unwrap(), "-");
    }

    #[test]
    fn test_compute_report() {
        let json: Value = serde_json::from_str(&compute_report(r#"{"weight":70,"height":175}"#).unwrap()).unwrap();
        assert_eq!(json["display_value"], "22.86");
        assert_eq!(json["color"], "#4ADE80");
        assert_eq!(json["glow_color"], "#22c55e");
        assert_eq!(json["tag"], "normal");
    }

    #[test]
    fn test_compute_report_for() {
        let ranges = serde_json::to_string(&RangeSpec::ADULT_METRIC).unwrap();
        let json: Value =
            serde_json::from_str(&compute_report_for(Some(500.0), Some(175.0), "metric", &ranges).unwrap()).unwrap();
        assert_eq!(json["highlight"]["weight"], 160.0);
        assert_eq!(json["bmi"]["category"], "obese_3");
    }

    #[test]
    fn test_switch_unit() {
        let json: Value = serde_json::from_str(&switch_unit(r#"{"weight":70,"height":175}"#, "imperial").unwrap()).unwrap();
        assert_eq!(json["unit"], "imperial");
        assert_eq!(json["weight"], 154.3);
    }
}
