//! Browser-side tests for the error paths, run with `wasm-pack test --headless`

#![cfg(target_arch = "wasm32")]

use indexmass_wasm::{classify_input, compute_report, slider_ranges, switch_unit};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn rejects_unknown_unit() {
    let err = classify_input("70", "175", "stone").unwrap_err();
    assert_eq!(err.as_string().unwrap(), "Unknown unit system: stone");
}

#[wasm_bindgen_test]
fn rejects_bad_number() {
    assert!(classify_input("seventy", "175", "metric").is_err());
}

#[wasm_bindgen_test]
fn rejects_unknown_mode() {
    assert!(slider_ranges("metric", "senior", None).is_err());
}

#[wasm_bindgen_test]
fn rejects_invalid_preferences() {
    let err = compute_report(r#"{"age": 40}"#).unwrap_err();
    assert!(err.as_string().unwrap().starts_with("Validation error"));
    assert!(switch_unit("not json", "metric").is_err());
}

#[wasm_bindgen_test]
fn classifies_in_browser() {
    let json = classify_input("70", "175", "metric").unwrap();
    assert!(json.contains("\"category\":\"normal\""));
}
