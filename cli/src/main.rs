//! IndexMass command line calculator
//!
//! Classifies a measurement, prints slider ranges and reference tables,
//! and manages the saved preferences the web client also understands.

use anyhow::{Context, Result};
use clap::Parser;
use indexmass_cli::{cli::Cli, commands, config, state::AppState};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    let config = config::AppConfig::load().context("Failed to load configuration")?;

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        preferences = %config.storage.preferences_path.display(),
        "Configuration loaded"
    );

    let format = cli.format.unwrap_or(config.output.format);
    let mut state = AppState::new(config);

    match commands::execute(&mut state, cli.command, format) {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "Command failed");
            eprintln!("error: {}", err);
            std::process::exit(err.exit_code());
        }
    }
}

/// Initialize tracing/logging on stderr, leaving stdout for command output
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "indexmass_cli=info".into()
        } else {
            "indexmass_cli=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
