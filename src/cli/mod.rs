//! CLI layer: argument parsing and command-stream dispatch

pub mod args;
pub mod commands;
pub mod error;

pub use args::Cli;
pub use error::{CliError, CliResult};
