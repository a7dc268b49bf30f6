use indexmass_shared::BmiReport;

use crate::config::OutputFormat;
use crate::error::CliResult;
use crate::render;
use crate::state::AppState;

pub fn run(state: &AppState, format: OutputFormat) -> CliResult<String> {
    let report = BmiReport::compute(state.preferences());

    match format {
        OutputFormat::Json => render::to_json(&report),
        OutputFormat::Text => Ok(render::render_report(
            &report,
            state.preferences(),
            state.config.output.precision,
        )),
    }
}
