//! Newline escaping for iCalendar description text.
//!
//! A single iCalendar property value must not contain raw line breaks, so
//! event descriptions are normalized on assignment: every CRLF or lone LF
//! becomes the literal two-character sequence `\n` (backslash + letter n).

/// Replaces raw line breaks with the literal `\n` escape sequence.
///
/// Both the two-character CRLF sequence and a bare LF normalize to the same
/// two characters, so mixed inputs come out uniform. The transform is lossy:
/// once applied, the original line-break style is unrecoverable. It is also
/// idempotent, since the output contains no raw newlines to rewrite.
#[must_use]
pub fn escape_newlines(s: &str) -> String {
    s.replace("\r\n", "\\n").replace('\n', "\\n")
}
