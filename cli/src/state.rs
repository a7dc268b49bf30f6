//! Application state
//!
//! Holds the loaded configuration and the preference store that every
//! command works against. Created once in `main` and passed by reference.

use indexmass_shared::Preferences;

use crate::config::AppConfig;
use crate::store::PreferenceStore;

/// Shared command state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration, with saved preferences already layered in
    pub config: AppConfig,
    /// Where `prefs set` and `prefs reset` write
    pub store: PreferenceStore,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let store = PreferenceStore::new(config.storage.preferences_path.clone());
        Self { config, store }
    }

    /// Effective preferences for this run
    #[inline]
    pub fn preferences(&self) -> &Preferences {
        &self.config.preferences
    }

    /// Replace the effective preferences after a save or reset
    pub fn set_preferences(&mut self, preferences: Preferences) {
        self.config.preferences = preferences;
    }
}
