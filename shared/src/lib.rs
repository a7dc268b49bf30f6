//! IndexMass Shared Library
//!
//! The BMI engine behind the calculator: unit conversion, classification,
//! slider/table ranges, reference table generation and highlighting. Used
//! by the WASM bindings and by the command line front end.

pub mod classifier;
pub mod errors;
pub mod highlight;
pub mod input;
pub mod measurement;
pub mod preferences;
pub mod ranges;
pub mod report;
pub mod table;
pub mod units;

// Re-export commonly used items
pub use classifier::{classify, BmiResult, Category, SilhouetteScale};
pub use errors::*;
pub use highlight::{resolve, Highlight};
pub use measurement::Measurement;
pub use preferences::{BiologicalSex, Preferences};
pub use ranges::{compute_ranges, CalculatorMode, RangeOverride, RangeSpec};
pub use report::BmiReport;
pub use table::{build_axis, build_grid, cell_bmi, ReferenceTable, TableCell, TableRow};
pub use units::*;
