//! Error types for the IndexMass engine
//!
//! The numeric core never fails: missing input is `None` and impossible
//! ranges produce empty sequences. These errors only come from the edges,
//! where text is turned into numbers or enums and where stored preferences
//! are validated.

use thiserror::Error;

/// Engine-wide error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Unknown unit system: {0}")]
    InvalidUnit(String),

    #[error("Unknown calculator mode: {0}")]
    InvalidMode(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for EngineError {
    fn from(errors: validator::ValidationErrors) -> Self {
        EngineError::Validation(errors.to_string())
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
