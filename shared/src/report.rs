//! End-to-end calculation
//!
//! Runs the whole pipeline for one set of preferences:
//! measurement → classification → ranges → highlight → reference table.

use serde::{Deserialize, Serialize};

use crate::classifier::{display_color, display_glow_color, silhouette_scale, BmiResult, SilhouetteScale};
use crate::highlight::{resolve, Highlight};
use crate::measurement::Measurement;
use crate::preferences::Preferences;
use crate::ranges::RangeSpec;
use crate::table::ReferenceTable;

/// Everything the UI needs to render one state of the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiReport {
    pub measurement: Measurement,
    /// `None` is the neutral "nothing to show" state
    pub bmi: Option<BmiResult>,
    /// Headline BMI text, two decimals
    pub display_value: Option<String>,
    /// Localization key of the category
    pub tag: Option<String>,
    pub color: String,
    pub glow_color: String,
    pub ranges: RangeSpec,
    pub highlight: Highlight,
    pub silhouette: Option<SilhouetteScale>,
    pub table: ReferenceTable,
}

impl BmiReport {
    /// Compute the report for stored preferences
    pub fn compute(preferences: &Preferences) -> Self {
        Self::for_measurement(preferences.measurement(), preferences.range_spec())
    }

    /// Compute the report for an explicit measurement and range
    pub fn for_measurement(measurement: Measurement, ranges: RangeSpec) -> Self {
        let bmi = measurement.classify();
        let highlight = resolve(measurement.weight, measurement.height, &ranges);
        let table = ReferenceTable::build(&ranges, measurement.unit, highlight);

        Self {
            measurement,
            bmi,
            display_value: bmi.as_ref().map(BmiResult::display_value),
            tag: bmi.map(|r| r.category.tag().to_string()),
            color: display_color(bmi.as_ref()).to_string(),
            glow_color: display_glow_color(bmi.as_ref()).to_string(),
            ranges,
            highlight,
            silhouette: silhouette_scale(measurement.weight, measurement.height, measurement.unit),
            table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{Category, NEUTRAL_COLOR};
    use crate::ranges::CalculatorMode;
    use crate::units::UnitSystem;

    #[test]
    fn test_default_report() {
        let report = BmiReport::compute(&Preferences::default());
        let bmi = report.bmi.unwrap();
        assert_eq!(bmi.category, Category::Normal);
        assert_eq!(report.display_value.as_deref(), Some("22.86"));
        assert_eq!(report.color, "#4ADE80");
        assert_eq!(report.glow_color, "#22c55e");
        assert_eq!(report.tag.as_deref(), Some("normal"));
        assert_eq!(report.highlight.weight, Some(70.0));

        let cell = report.table.highlighted_cell().unwrap();
        assert_eq!((cell.weight, cell.height), (70.0, 175.0));
        assert_eq!(cell.label, "22.9");
    }

    #[test]
    fn test_empty_report() {
        let prefs = Preferences {
            weight: None,
            ..Default::default()
        };
        let report = BmiReport::compute(&prefs);
        assert!(report.bmi.is_none());
        assert!(report.display_value.is_none());
        assert!(report.silhouette.is_none());
        assert_eq!(report.color, NEUTRAL_COLOR);
        assert_eq!(report.glow_color, NEUTRAL_COLOR);
        assert!(report.tag.is_none());
        assert!(!report.highlight.is_active());
        assert!(report.table.highlighted_cell().is_none());
        assert!(!report.table.is_empty());
    }

    #[test]
    fn test_child_imperial_report() {
        let prefs = Preferences {
            unit: UnitSystem::Imperial,
            mode: CalculatorMode::Child,
            age: Some(4),
            weight: Some(38.0),
            height: Some(40.0),
            ..Default::default()
        };
        let report = BmiReport::compute(&prefs);
        assert_eq!(report.ranges.h_min, 33.0);
        assert_eq!(report.ranges.w_max, 97.0);
        let cell = report.table.highlighted_cell().unwrap();
        assert_eq!((cell.weight, cell.height), (38.0, 40.0));
    }

    #[test]
    fn test_obese_report_colors() {
        let prefs = Preferences {
            weight: Some(130.0),
            ..Default::default()
        };
        let report = BmiReport::compute(&prefs);
        assert_eq!(report.tag.as_deref(), Some("obese_3"));
        assert_eq!(report.color, "#EF4444");
        assert_eq!(report.glow_color, "#991b1b");
    }

    #[test]
    fn test_report_serializes() {
        let report = BmiReport::compute(&Preferences::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["bmi"]["category"], "normal");
        assert_eq!(json["tag"], "normal");
        assert_eq!(json["glow_color"], "#22c55e");
        assert_eq!(json["ranges"]["w_min"], 40.0);
        assert!(json["table"]["rows"].as_array().unwrap().len() > 10);
    }
}
