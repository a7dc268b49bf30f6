//! IndexMass CLI Library
//!
//! Command line front end for the BMI engine. The modules are exposed so the
//! integration tests can drive commands without spawning the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod state;
pub mod store;
