//! CLI: demo fixtures calendar, iCalendar/JSON rendering, .ics file writer
//!
//! This crate provides the `icalfeed` command-line interface.

pub mod cli;
pub mod demo;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use error::{CliError, CliResult};
