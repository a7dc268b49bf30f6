//! Preference persistence
//!
//! Preferences are saved as a TOML file with a single `[preferences]`
//! table, so the same file can be layered into [`AppConfig`](crate::config::AppConfig)
//! on the next start.

use indexmass_shared::Preferences;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::CliResult;

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreferences {
    preferences: Preferences,
}

/// File-backed preference store
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read saved preferences, `None` when nothing has been saved yet
    pub fn load(&self) -> CliResult<Option<Preferences>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No saved preferences");
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)?;
        let stored: StoredPreferences = toml::from_str(&text)?;
        Ok(Some(stored.preferences))
    }

    pub fn save(&self, preferences: &Preferences) -> CliResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(&StoredPreferences {
            preferences: preferences.clone(),
        })?;
        fs::write(&self.path, text)?;
        debug!(path = %self.path.display(), "Saved preferences");
        Ok(())
    }

    /// Remove the saved file. Returns whether anything was removed.
    pub fn clear(&self) -> CliResult<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)?;
        debug!(path = %self.path.display(), "Removed saved preferences");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmass_shared::{CalculatorMode, RangeOverride, UnitSystem};

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(dir.path().join("prefs.toml"));
        assert!(store.load().unwrap().is_none());
        assert!(!store.clear().unwrap());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(dir.path().join("nested").join("prefs.toml"));
        let prefs = Preferences {
            unit: UnitSystem::Imperial,
            mode: CalculatorMode::Child,
            age: Some(7),
            weight: Some(50.0),
            height: Some(45.0),
            ranges: RangeOverride {
                w_step: Some(4.0),
                ..Default::default()
            },
            ..Default::default()
        };

        store.save(&prefs).unwrap();
        assert_eq!(store.load().unwrap(), Some(prefs));

        assert!(store.clear().unwrap());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "[preferences\nunit = ").unwrap();
        let store = PreferenceStore::new(path);
        assert!(store.load().is_err());
    }
}
