//! Common test utilities for integration tests
//!
//! Every test app gets its own temporary preference file.

use clap::Parser;
use indexmass_cli::{cli::Cli, commands, config::AppConfig, error::CliResult, state::AppState};
use tempfile::TempDir;

/// Test application wrapper
pub struct TestApp {
    pub state: AppState,
    dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut config = AppConfig::default();
        config.storage.preferences_path = dir.path().join("preferences.toml");
        Self {
            state: AppState::new(config),
            dir,
        }
    }

    /// Run one command line (without the program name)
    pub fn run(&mut self, args: &[&str]) -> CliResult<String> {
        let cli = Cli::try_parse_from(std::iter::once("indexmass").chain(args.iter().copied()))
            .expect("Failed to parse arguments");
        let format = cli.format.unwrap_or(self.state.config.output.format);
        commands::execute(&mut self.state, cli.command, format)
    }

    /// Load configuration the way the next start would, from this app's files
    pub fn reload_config(&self) -> AppConfig {
        let path = &self.state.config.storage.preferences_path;
        std::fs::write(
            self.dir.path().join("testing.toml"),
            format!("[storage]\npreferences_path = {:?}\n", path.to_string_lossy()),
        )
        .expect("Failed to write config file");
        AppConfig::load_from(self.dir.path(), "testing").expect("Failed to load config")
    }

    /// Run and parse JSON output
    pub fn run_json(&mut self, args: &[&str]) -> serde_json::Value {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        let output = self.run(&full).expect("Command failed");
        serde_json::from_str(&output).expect("Output is not JSON")
    }
}
