//! Command-line interface module.
//!
//! This module handles:
//! - Argument parsing via clap
//! - Per-address evaluation for each mode (normalize, parse, version)
//! - Reading stdin input and running the processing loop
//! - Output formatting (text, table, CSV, JSON)

mod args;
mod mode;
mod output;
mod run;

pub use args::Args;
pub use mode::Mode;
pub use output::{OutputFormat, OutputFormatter, ResultSet, Value};
pub use run::{read_inputs, run};
