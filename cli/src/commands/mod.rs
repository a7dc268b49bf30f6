//! Command handlers
//!
//! Each handler takes the application state and returns the text to print.
//! Values given on the command line win over the stored preferences.

mod classify;
mod prefs;
mod ranges;
mod report;
mod table;

use indexmass_shared::input::{commit_value, parse_numeric_input, InputLimits};
use indexmass_shared::{Measurement, Preferences, UnitSystem};
use tracing::warn;

use crate::cli::Commands;
use crate::config::OutputFormat;
use crate::error::CliResult;
use crate::state::AppState;

/// Run one command
pub fn execute(state: &mut AppState, command: Commands, format: OutputFormat) -> CliResult<String> {
    match command {
        Commands::Classify { weight, height, unit } => classify::run(state, weight, height, unit, format),
        Commands::Ranges { unit, mode, age } => ranges::run(state, unit, mode, age, format),
        Commands::Table { weight, height, unit } => table::run(state, weight, height, unit, format),
        Commands::Report => report::run(state, format),
        Commands::Prefs { action } => prefs::run(state, action, format),
    }
}

/// Stored preferences re-expressed in the requested unit system
fn preferences_in(state: &AppState, unit: Option<UnitSystem>) -> Preferences {
    let mut preferences = state.preferences().clone();
    if let Some(unit) = unit {
        preferences.switch_unit(unit);
    }
    preferences
}

/// Parse entry text and hold it to the field limits, like the UI does on blur.
///
/// Empty text stays `None`.
fn parse_entry(text: &str, limits: InputLimits) -> CliResult<Option<f64>> {
    Ok(parse_numeric_input(text)?.map(|value| {
        let committed = commit_value(Some(value), limits);
        if committed != value {
            warn!(value, committed, "Entry outside {}..={}, clamped", limits.min, limits.max);
        }
        committed
    }))
}

/// Measurement from command line text, falling back to stored values
fn measurement_from_args(
    preferences: &Preferences,
    weight: Option<String>,
    height: Option<String>,
) -> CliResult<Measurement> {
    let stored = preferences.measurement();
    let unit = preferences.unit;
    let weight = match weight {
        Some(text) => parse_entry(&text, InputLimits::weight(unit))?,
        None => stored.weight,
    };
    let height = match height {
        Some(text) => parse_entry(&text, InputLimits::height(unit))?,
        None => stored.height,
    };
    Ok(Measurement::new(weight, height, unit))
}
