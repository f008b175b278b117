//! Shared line-writing helpers for iCalendar output.
//!
//! Calendar clients parse the produced text positionally, so every helper
//! here is exact about terminators and digit widths: lines always end with
//! CRLF and UTC instants are rendered as the fixed-width
//! `YYYYMMDDTHHMMSSZ` layout with no separators.

use chrono::{DateTime, Utc};

/// Line terminator required on every emitted line, regardless of platform.
pub(crate) const CRLF: &str = "\r\n";

/// Appends a `NAME:value` content line terminated by CRLF.
pub(crate) fn push_prop(out: &mut String, name: &str, value: &str) {
    out.push_str(name);
    out.push(':');
    out.push_str(value);
    out.push_str(CRLF);
}

/// Appends a `NAME:value` line only when the value is non-blank.
///
/// Blank (empty or all-whitespace) values omit the entire line, marker
/// included, rather than emitting an empty property.
pub(crate) fn push_prop_if_present(out: &mut String, name: &str, value: &str) {
    if !value.trim().is_empty() {
        push_prop(out, name, value);
    }
}

/// Formats a UTC instant as `YYYYMMDDTHHMMSSZ`.
///
/// Exactly 15 zero-padded digits plus the two literal letters `T` and `Z`.
pub(crate) fn format_utc(dt: DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}
