use indexmass_shared::{ranges::is_valid_child_age, CalculatorMode, UnitSystem};
use tracing::warn;

use super::preferences_in;
use crate::config::OutputFormat;
use crate::error::CliResult;
use crate::render;
use crate::state::AppState;

pub fn run(
    state: &AppState,
    unit: Option<UnitSystem>,
    mode: Option<CalculatorMode>,
    age: Option<i32>,
    format: OutputFormat,
) -> CliResult<String> {
    let mut preferences = preferences_in(state, unit);
    if let Some(mode) = mode {
        preferences.mode = mode;
    }
    if age.is_some() {
        preferences.age = age;
    }
    if preferences.mode == CalculatorMode::Child && !preferences.age.is_some_and(is_valid_child_age) {
        warn!(age = ?preferences.age, "Child mode needs an age between 2 and 20, using adult ranges");
    }
    let spec = preferences.range_spec();

    match format {
        OutputFormat::Json => render::to_json(&spec),
        OutputFormat::Text => Ok(render::render_ranges(
            &spec,
            preferences.unit,
            preferences.mode,
            preferences.age,
        )),
    }
}
