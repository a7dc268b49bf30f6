//! Configuration management for the IndexMass CLI
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Saved preferences (config/preferences.toml unless overridden)
//! 4. Environment variables (prefix: IM__)

use clap::ValueEnum;
use config::{builder::DefaultState, ConfigBuilder};
use indexmass_shared::Preferences;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::CliResult;

/// Directory holding environment config files
pub const CONFIG_DIR: &str = "config";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Decimals for the headline BMI
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            precision: 2,
        }
    }
}

/// Where preferences are persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub preferences_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            preferences_path: PathBuf::from(CONFIG_DIR).join("preferences.toml"),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preferences: Preferences::default(),
            output: OutputConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Saved preference file
    /// 4. Environment variables with IM__ prefix
    pub fn load() -> CliResult<Self> {
        Self::load_from(Path::new(CONFIG_DIR), &current_env())
    }

    /// Load configuration using an explicit config directory and environment name
    pub fn load_from(config_dir: &Path, env_name: &str) -> CliResult<Self> {
        let env_file = config_dir.join(format!("{}.toml", env_name));

        let defaults = AppConfig::default();

        // First pass only resolves where the preference file lives
        let base: AppConfig = Self::builder(&defaults, &env_file, None)?.build()?.try_deserialize()?;
        let preferences_path = base.storage.preferences_path;

        // A saved record owns the measurement: keys it lacks were cleared
        let mut defaults = defaults;
        if preferences_path.exists() {
            defaults.preferences.weight = None;
            defaults.preferences.height = None;
        }

        let config = Self::builder(&defaults, &env_file, Some(&preferences_path))?.build()?;
        Ok(config.try_deserialize()?)
    }

    fn builder(
        defaults: &AppConfig,
        env_file: &Path,
        preferences_file: Option<&Path>,
    ) -> CliResult<ConfigBuilder<DefaultState>> {
        let mut builder = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(defaults)?)
            // Load from environment-specific config file
            .add_source(config::File::from(env_file).required(false));

        if let Some(path) = preferences_file {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        // Override with environment variables (IM__ prefix)
        // e.g., IM__PREFERENCES__UNIT=imperial sets preferences.unit
        Ok(builder.add_source(
            config::Environment::with_prefix("IM")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        ))
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        current_env() == "production"
    }
}

fn current_env() -> String {
    env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string())
}
