use indexmass_shared::UnitSystem;
use tracing::debug;

use super::{measurement_from_args, preferences_in};
use crate::config::OutputFormat;
use crate::error::CliResult;
use crate::render;
use crate::state::AppState;

pub fn run(
    state: &AppState,
    weight: Option<String>,
    height: Option<String>,
    unit: Option<UnitSystem>,
    format: OutputFormat,
) -> CliResult<String> {
    let preferences = preferences_in(state, unit);
    let measurement = measurement_from_args(&preferences, weight, height)?;
    let result = measurement.classify();
    debug!(
        weight = ?measurement.weight,
        height = ?measurement.height,
        unit = %measurement.unit,
        category = ?result.map(|r| r.category),
        "Classified measurement"
    );

    match format {
        OutputFormat::Json => render::to_json(&result),
        OutputFormat::Text => Ok(render::render_classification(
            &measurement,
            result.as_ref(),
            state.config.output.precision,
        )),
    }
}
