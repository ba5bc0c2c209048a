//! chemtok CLI library
//!
//! Command implementations, input resolution, output formatting and progress
//! reporting for the `chemtok` binary.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
