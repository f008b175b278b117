//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

use crate::output::RenderFormat;

/// icalfeed - Publish league fixtures as an iCalendar feed
#[derive(Debug, Parser)]
#[command(name = "icalfeed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// League name used for the calendar title and demo fixtures
    #[arg(default_value = "Badminton League")]
    pub league: String,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    // --- Output format flags ---
    /// Emit the structured JSON representation instead of iCalendar text
    #[arg(long, group = "render_format")]
    pub json: bool,

    /// Write the iCalendar document to a .ics file instead of stdout
    #[arg(long, short, env = "ICALFEED_OUTPUT")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Returns the render format based on CLI flags.
    pub fn render_format(&self) -> RenderFormat {
        if self.json {
            RenderFormat::Json
        } else {
            RenderFormat::Text
        }
    }
}
