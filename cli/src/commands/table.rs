use indexmass_shared::{resolve, ReferenceTable, UnitSystem};
use tracing::{debug, warn};

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
    let spec = preferences.range_spec();

    let highlight = resolve(measurement.weight, measurement.height, &spec);
    let table = ReferenceTable::build(&spec, measurement.unit, highlight);
    debug!(
        columns = table.weights.len(),
        rows = table.heights.len(),
        highlighted = highlight.is_active(),
        "Built reference table"
    );

    if table.is_empty() {
        warn!(?spec, "Range produces no table, check bounds and steps");
    }

    match format {
        OutputFormat::Json => render::to_json(&table),
        OutputFormat::Text => Ok(render::render_table(&table)),
    }
}
