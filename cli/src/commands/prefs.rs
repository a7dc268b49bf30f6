use indexmass_shared::{input::InputLimits, Preferences};
use tracing::info;

use super::parse_entry;
use crate::cli::PrefsAction;
use crate::config::OutputFormat;
use crate::error::CliResult;
use crate::render;
use crate::state::AppState;

pub fn run(state: &mut AppState, action: PrefsAction, format: OutputFormat) -> CliResult<String> {
    match action {
        PrefsAction::Show => show(state.preferences(), format),
        PrefsAction::Set {
            unit,
            mode,
            age,
            gender,
            language,
            weight,
            height,
            w_min,
            w_max,
            w_step,
            h_min,
            h_max,
            h_step,
        } => {
            let mut preferences = state.preferences().clone();

            // Unit first: switching converts the stored measurement and drops overrides
            if let Some(unit) = unit {
                preferences.switch_unit(unit);
            }
            if let Some(mode) = mode {
                preferences.mode = mode;
            }
            if age.is_some() {
                preferences.age = age;
            }
            if let Some(gender) = gender {
                preferences.gender = gender;
            }
            if let Some(language) = language {
                preferences.language = language;
            }
            if let Some(text) = weight {
                preferences.weight = parse_entry(&text, InputLimits::weight(preferences.unit))?;
            }
            if let Some(text) = height {
                preferences.height = parse_entry(&text, InputLimits::height(preferences.unit))?;
            }

            let overrides = &mut preferences.ranges;
            for (slot, value) in [
                (&mut overrides.w_min, w_min),
                (&mut overrides.w_max, w_max),
                (&mut overrides.w_step, w_step),
                (&mut overrides.h_min, h_min),
                (&mut overrides.h_max, h_max),
                (&mut overrides.h_step, h_step),
            ] {
                if value.is_some() {
                    *slot = value;
                }
            }

            let preferences = preferences.validated()?;
            state.store.save(&preferences)?;
            info!(path = %state.store.path().display(), "Preferences saved");
            state.set_preferences(preferences);
            show(state.preferences(), format)
        }
        PrefsAction::Reset => {
            let removed = state.store.clear()?;
            state.set_preferences(Preferences::default());
            if removed {
                info!(path = %state.store.path().display(), "Preferences reset");
            }
            match format {
                OutputFormat::Json => render::to_json(state.preferences()),
                OutputFormat::Text if removed => Ok("Saved preferences removed.\n".to_string()),
                OutputFormat::Text => Ok("No saved preferences.\n".to_string()),
            }
        }
    }
}

fn show(preferences: &Preferences, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => render::to_json(preferences),
        OutputFormat::Text => render::render_preferences(preferences),
    }
}
