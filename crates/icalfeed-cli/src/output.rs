//! Feed rendering and file output.
//!
//! The three consumption shapes for a published calendar: iCalendar text,
//! the structured JSON representation, and a `.ics` file on disk.

use std::fs;
use std::path::Path;

use icalfeed_core::Calendar;

use crate::error::CliResult;

/// How to render the calendar on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderFormat {
    /// iCalendar text, as produced by `Calendar::serialize`.
    #[default]
    Text,
    /// Pretty-printed JSON of the calendar's fields.
    Json,
}

/// Renders the calendar in the requested format.
pub fn render(calendar: &Calendar, format: RenderFormat) -> CliResult<String> {
    match format {
        RenderFormat::Text => Ok(calendar.serialize()),
        RenderFormat::Json => Ok(serde_json::to_string_pretty(calendar)?),
    }
}

/// Writes the serialized calendar to a `.ics` file.
///
/// The file holds exactly the bytes of `Calendar::serialize`; clients
/// downloading it get the same document a text response would carry.
pub fn write_ics(calendar: &Calendar, path: &Path) -> CliResult<()> {
    fs::write(path, calendar.serialize())?;
    tracing::debug!(path = %path.display(), "wrote iCalendar file");
    Ok(())
}
