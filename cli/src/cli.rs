use clap::{Parser, Subcommand};
use indexmass_shared::{BiologicalSex, CalculatorMode, UnitSystem};

use crate::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "indexmass")]
#[command(about = "BMI calculator with reference tables", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a weight and height
    Classify {
        /// Weight in the selected unit (stored value when omitted)
        #[arg(short, long)]
        weight: Option<String>,

        /// Height in the selected unit (stored value when omitted)
        #[arg(long)]
        height: Option<String>,

        /// Unit system (metric or imperial)
        #[arg(short, long)]
        unit: Option<UnitSystem>,
    },

    /// Show the slider and table ranges
    Ranges {
        /// Unit system (metric or imperial)
        #[arg(short, long)]
        unit: Option<UnitSystem>,

        /// Calculator mode (adult or child)
        #[arg(short, long)]
        mode: Option<CalculatorMode>,

        /// Age in years, used in child mode
        #[arg(short, long)]
        age: Option<i32>,
    },

    /// Print the reference table with the measurement highlighted
    Table {
        /// Weight in the selected unit (stored value when omitted)
        #[arg(short, long)]
        weight: Option<String>,

        /// Height in the selected unit (stored value when omitted)
        #[arg(long)]
        height: Option<String>,

        /// Unit system (metric or imperial)
        #[arg(short, long)]
        unit: Option<UnitSystem>,
    },

    /// Full report for the stored preferences
    Report,

    /// Manage saved preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum PrefsAction {
    /// Print the effective preferences
    Show,

    /// Update and save preferences
    Set {
        /// Unit system; converts the stored measurement
        #[arg(long)]
        unit: Option<UnitSystem>,

        #[arg(long)]
        mode: Option<CalculatorMode>,

        #[arg(long)]
        age: Option<i32>,

        #[arg(long)]
        gender: Option<BiologicalSex>,

        #[arg(long)]
        language: Option<String>,

        #[arg(long)]
        weight: Option<String>,

        #[arg(long)]
        height: Option<String>,

        /// Lowest weight on the table axis
        #[arg(long)]
        w_min: Option<f64>,

        /// Highest weight on the table axis
        #[arg(long)]
        w_max: Option<f64>,

        /// Weight axis step
        #[arg(long)]
        w_step: Option<f64>,

        /// Lowest height on the table axis
        #[arg(long)]
        h_min: Option<f64>,

        /// Highest height on the table axis
        #[arg(long)]
        h_max: Option<f64>,

        /// Height axis step
        #[arg(long)]
        h_step: Option<f64>,
    },

    /// Delete saved preferences
    Reset,
}
