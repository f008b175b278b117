//! Event types for published calendars.
//!
//! This module provides the `VEVENT` component of the calendar model:
//! - [`Event`]: one scheduled occurrence, owning zero or more alarms
//! - [`Priority`]: RFC 5545 priority, serialized as its numeric code
//! - [`Transparency`]: free/busy transparency, with the derived
//!   [`BusyStatus`] emitted for Outlook compatibility

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::alarm::Alarm;
use crate::escape::escape_newlines;
use crate::write::{CRLF, format_utc, push_prop, push_prop_if_present};

/// Event priority (RFC 5545 §3.8.1.9).
///
/// iCalendar defines priority as an integer 0-9; the discriminants here are
/// the wire values and are what gets emitted, never the symbolic names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// No priority set.
    NoPriority = 0,
    /// High priority.
    High = 1,
    /// Normal priority.
    #[default]
    Normal = 5,
    /// Low priority.
    Low = 9,
}

impl Priority {
    /// Returns the numeric code emitted on the `PRIORITY:` line.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

/// Whether the event blocks time on the attendee's schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Transparency {
    /// The event consumes time (shows as busy).
    #[default]
    Opaque,
    /// The event does not consume time (shows as free).
    Transparent,
}

impl Transparency {
    /// Returns the symbolic name emitted on the `TRANSP:` line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Opaque => "OPAQUE",
            Self::Transparent => "TRANSPARENT",
        }
    }

    /// Derives the Outlook busy status: opaque events show as busy,
    /// everything else as free.
    pub fn busy_status(&self) -> BusyStatus {
        match self {
            Self::Opaque => BusyStatus::Busy,
            Self::Transparent => BusyStatus::Free,
        }
    }
}

/// Busy status derived from [`Transparency`], never stored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BusyStatus {
    /// Blocks time on the schedule.
    Busy,
    /// Does not block time.
    Free,
}

impl BusyStatus {
    /// Returns the name emitted on the `X-MICROSOFT-CDO-BUSYSTATUS:` line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Busy => "BUSY",
            Self::Free => "FREE",
        }
    }
}

/// One scheduled occurrence in a published calendar.
///
/// All instants are stored in UTC; constructors and builders accepting other
/// offsets normalize on the way in, so serialization never has to convert.
/// Uniqueness of `uid` is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier for the event.
    pub uid: String,
    /// When the event starts (UTC).
    pub date_start: DateTime<Utc>,
    /// When the event ends (UTC).
    pub date_end: DateTime<Utc>,
    /// Creation/modification stamp (UTC). Always an explicit input; the
    /// core never reads the ambient clock, so output stays deterministic.
    pub timestamp: DateTime<Utc>,
    /// Event title, emitted as both `TITLE:` and `SUMMARY:` for client
    /// compatibility.
    pub summary: String,
    /// Organizer: a mailto address, a URL, or just a name. Omitted from
    /// output when blank.
    pub organizer: String,
    /// Where the event takes place.
    pub location: String,
    /// Event priority, emitted as its numeric code.
    pub priority: Priority,
    /// Free text, stored with line breaks already replaced by the literal
    /// `\n` escape. Only writable through the normalizing setter.
    description: String,
    /// Schedule transparency; drives the derived busy status.
    pub transparency: Transparency,
    /// Event URL. Omitted from output when blank.
    pub url: String,
    /// Whether this event lasts all day. Stored for forward compatibility;
    /// has no effect on serialized output.
    pub all_day_event: bool,
    /// Comma-separated category tags. Omitted from output when blank.
    /// Embedded commas are passed through unescaped.
    pub categories: String,
    /// Alarms attached to this event, serialized in insertion order.
    pub alarms: Vec<Alarm>,
}

impl Default for Event {
    fn default() -> Self {
        Self {
            uid: String::new(),
            date_start: DateTime::<Utc>::default(),
            date_end: DateTime::<Utc>::default(),
            timestamp: DateTime::<Utc>::default(),
            summary: String::new(),
            organizer: String::new(),
            location: String::new(),
            priority: Priority::default(),
            description: String::new(),
            transparency: Transparency::default(),
            url: String::new(),
            all_day_event: false,
            categories: String::new(),
            alarms: Vec::new(),
        }
    }
}

impl Event {
    /// Creates a new event with required fields.
    ///
    /// `timestamp` is the creation stamp; callers wanting the conventional
    /// "now" pass `Utc::now()` themselves.
    pub fn new(
        uid: impl Into<String>,
        summary: impl Into<String>,
        date_start: DateTime<Utc>,
        date_end: DateTime<Utc>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            uid: uid.into(),
            summary: summary.into(),
            date_start,
            date_end,
            timestamp,
            ..Self::default()
        }
    }

    /// Builder method to set the start from a datetime in any timezone,
    /// normalized to UTC.
    pub fn with_start<Tz: TimeZone>(mut self, start: DateTime<Tz>) -> Self {
        self.date_start = start.with_timezone(&Utc);
        self
    }

    /// Builder method to set the end from a datetime in any timezone,
    /// normalized to UTC.
    pub fn with_end<Tz: TimeZone>(mut self, end: DateTime<Tz>) -> Self {
        self.date_end = end.with_timezone(&Utc);
        self
    }

    /// Builder method to set the organizer.
    pub fn with_organizer(mut self, organizer: impl Into<String>) -> Self {
        self.organizer = organizer.into();
        self
    }

    /// Builder method to set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Builder method to set the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Builder method to set the description (normalizing line breaks).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.set_description(description);
        self
    }

    /// Builder method to set the transparency.
    pub fn with_transparency(mut self, transparency: Transparency) -> Self {
        self.transparency = transparency;
        self
    }

    /// Builder method to set the event URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Builder method to mark the event as all-day.
    pub fn with_all_day(mut self, all_day: bool) -> Self {
        self.all_day_event = all_day;
        self
    }

    /// Builder method to set the category tags.
    pub fn with_categories(mut self, categories: impl Into<String>) -> Self {
        self.categories = categories.into();
        self
    }

    /// Builder method to attach an alarm.
    pub fn with_alarm(mut self, alarm: Alarm) -> Self {
        self.alarms.push(alarm);
        self
    }

    /// Sets the description, replacing raw line breaks with the literal
    /// `\n` escape sequence.
    ///
    /// The normalization happens here, at assignment time, and is lossy:
    /// the stored value never holds raw newlines and the original
    /// line-break style cannot be recovered.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = escape_newlines(&description.into());
    }

    /// Returns the stored (already normalized) description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Derives the busy status from the transparency.
    pub fn busy_status(&self) -> BusyStatus {
        self.transparency.busy_status()
    }

    /// Serializes this event as a `VEVENT` block.
    ///
    /// Field order is fixed and identical run-to-run. Organizer, categories
    /// and URL lines are omitted entirely when blank. The closing
    /// `END:VEVENT` line is CRLF-terminated.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        out.push_str("BEGIN:VEVENT");
        out.push_str(CRLF);
        push_prop(&mut out, "UID", &self.uid);
        push_prop(&mut out, "TITLE", &self.summary);
        push_prop(&mut out, "SUMMARY", &self.summary);
        push_prop(&mut out, "PRIORITY", &self.priority.code().to_string());
        push_prop_if_present(&mut out, "ORGANIZER", &self.organizer);
        push_prop(&mut out, "TRANSP", self.transparency.as_str());
        push_prop(
            &mut out,
            "X-MICROSOFT-CDO-BUSYSTATUS",
            self.busy_status().as_str(),
        );
        push_prop(&mut out, "LOCATION", &self.location);
        push_prop(&mut out, "DTSTART", &format_utc(self.date_start));
        push_prop(&mut out, "DTEND", &format_utc(self.date_end));
        push_prop(&mut out, "DTSTAMP", &format_utc(self.timestamp));
        push_prop(&mut out, "DESCRIPTION", &self.description);
        push_prop_if_present(&mut out, "CATEGORIES", &self.categories);
        push_prop_if_present(&mut out, "URL", &self.url);
        for alarm in &self.alarms {
            out.push_str(&alarm.serialize());
        }
        out.push_str("END:VEVENT");
        out.push_str(CRLF);
        out
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset, TimeZone};

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn fixture_event() -> Event {
        Event::new(
            "match-42",
            "🏸 Home Team vs Away Team",
            utc(2022, 11, 10, 19, 30, 0),
            utc(2022, 11, 10, 22, 30, 0),
            utc(2022, 11, 1, 8, 0, 0),
        )
    }

    mod construction {
        use super::*;

        #[test]
        fn defaults() {
            let event = Event::default();
            assert_eq!(event.uid, "");
            assert_eq!(event.priority, Priority::Normal);
            assert_eq!(event.transparency, Transparency::Opaque);
            assert_eq!(event.description(), "");
            assert!(!event.all_day_event);
            assert!(event.alarms.is_empty());
        }

        #[test]
        fn builder_pattern() {
            let event = fixture_event()
                .with_organizer("mailto:fixtures@example.com")
                .with_location("Sports Center")
                .with_priority(Priority::High)
                .with_transparency(Transparency::Transparent)
                .with_url("https://example.com/fixtures")
                .with_categories("Badminton,Completed")
                .with_all_day(true)
                .with_alarm(Alarm::new(Duration::minutes(60)));

            assert_eq!(event.organizer, "mailto:fixtures@example.com");
            assert_eq!(event.location, "Sports Center");
            assert_eq!(event.priority, Priority::High);
            assert_eq!(event.transparency, Transparency::Transparent);
            assert_eq!(event.url, "https://example.com/fixtures");
            assert_eq!(event.categories, "Badminton,Completed");
            assert!(event.all_day_event);
            assert_eq!(event.alarms.len(), 1);
        }
    }

    mod description_normalization {
        use super::*;

        #[test]
        fn crlf_is_stored_as_literal_escape() {
            let mut event = Event::default();
            event.set_description("SCORE: 3-2\r\nHome team WINS");
            assert_eq!(event.description(), "SCORE: 3-2\\nHome team WINS");
        }

        #[test]
        fn lf_is_stored_as_literal_escape() {
            let event = Event::default().with_description("line1\nline2");
            assert_eq!(event.description(), "line1\\nline2");
        }

        #[test]
        fn mixed_breaks_normalize_identically() {
            let event = Event::default().with_description("\na\r\nb\n");
            assert_eq!(event.description(), "\\na\\nb\\n");
        }

        #[test]
        fn reassignment_is_idempotent_on_stored_value() {
            let mut event = Event::default();
            event.set_description("a\r\nb");
            let stored = event.description().to_string();
            event.set_description(stored.clone());
            assert_eq!(event.description(), stored);
        }
    }

    mod derivations {
        use super::*;

        #[test]
        fn priority_codes() {
            assert_eq!(Priority::NoPriority.code(), 0);
            assert_eq!(Priority::High.code(), 1);
            assert_eq!(Priority::Normal.code(), 5);
            assert_eq!(Priority::Low.code(), 9);
        }

        #[test]
        fn busy_status_from_transparency() {
            assert_eq!(Transparency::Opaque.busy_status(), BusyStatus::Busy);
            assert_eq!(Transparency::Transparent.busy_status(), BusyStatus::Free);
        }
    }

    mod serialization {
        use super::*;

        #[test]
        fn empty_event_line_sequence() {
            let expected = "BEGIN:VEVENT\r\n\
                UID:\r\n\
                TITLE:\r\n\
                SUMMARY:\r\n\
                PRIORITY:5\r\n\
                TRANSP:OPAQUE\r\n\
                X-MICROSOFT-CDO-BUSYSTATUS:BUSY\r\n\
                LOCATION:\r\n\
                DTSTART:19700101T000000Z\r\n\
                DTEND:19700101T000000Z\r\n\
                DTSTAMP:19700101T000000Z\r\n\
                DESCRIPTION:\r\n\
                END:VEVENT\r\n";
            assert_eq!(Event::default().serialize(), expected);
        }

        #[test]
        fn full_fixture_block() {
            let event = fixture_event()
                .with_location("Venue")
                .with_priority(Priority::High)
                .with_transparency(Transparency::Transparent)
                .with_categories("Badminton,Completed")
                .with_description("\nSCORE: 3-2\nHome team WINS\n");

            let expected = "BEGIN:VEVENT\r\n\
                UID:match-42\r\n\
                TITLE:🏸 Home Team vs Away Team\r\n\
                SUMMARY:🏸 Home Team vs Away Team\r\n\
                PRIORITY:1\r\n\
                TRANSP:TRANSPARENT\r\n\
                X-MICROSOFT-CDO-BUSYSTATUS:FREE\r\n\
                LOCATION:Venue\r\n\
                DTSTART:20221110T193000Z\r\n\
                DTEND:20221110T223000Z\r\n\
                DTSTAMP:20221101T080000Z\r\n\
                DESCRIPTION:\\nSCORE: 3-2\\nHome team WINS\\n\r\n\
                CATEGORIES:Badminton,Completed\r\n\
                END:VEVENT\r\n";
            assert_eq!(event.serialize(), expected);
        }

        #[test]
        fn non_utc_input_is_normalized() {
            let offset = FixedOffset::east_opt(3 * 3600).unwrap();
            let event = Event::default()
                .with_start(offset.with_ymd_and_hms(2022, 11, 10, 19, 30, 0).unwrap())
                .with_end(offset.with_ymd_and_hms(2022, 11, 10, 22, 30, 0).unwrap());

            let out = event.serialize();
            assert!(out.contains("DTSTART:20221110T163000Z"));
            assert!(out.contains("DTEND:20221110T193000Z"));
        }

        #[test]
        fn blank_conditional_fields_are_omitted() {
            for blank in ["", "   "] {
                let out = Event::default()
                    .with_organizer(blank)
                    .with_url(blank)
                    .with_categories(blank)
                    .serialize();
                assert!(!out.contains("ORGANIZER"), "{blank:?}");
                assert!(!out.contains("URL"), "{blank:?}");
                assert!(!out.contains("CATEGORIES"), "{blank:?}");
            }
        }

        #[test]
        fn non_blank_conditional_fields_are_present() {
            let out = Event::default()
                .with_organizer("mailto:a@example.com")
                .with_url("https://example.com/e/1")
                .with_categories("Badminton")
                .serialize();
            assert!(out.contains("ORGANIZER:mailto:a@example.com\r\n"));
            assert!(out.contains("URL:https://example.com/e/1\r\n"));
            assert!(out.contains("CATEGORIES:Badminton\r\n"));
        }

        #[test]
        fn priority_serializes_as_integer() {
            for (priority, line) in [
                (Priority::NoPriority, "PRIORITY:0"),
                (Priority::High, "PRIORITY:1"),
                (Priority::Normal, "PRIORITY:5"),
                (Priority::Low, "PRIORITY:9"),
            ] {
                let out = Event::default().with_priority(priority).serialize();
                assert!(out.contains(line));
            }
        }

        #[test]
        fn all_day_flag_has_no_output_effect() {
            let plain = Event::default().serialize();
            let all_day = Event::default().with_all_day(true).serialize();
            assert_eq!(plain, all_day);
        }

        #[test]
        fn alarms_nest_in_order_before_end_marker() {
            let event = fixture_event()
                .with_alarm(Alarm::new(Duration::minutes(60)))
                .with_alarm(Alarm::new(Duration::minutes(30)))
                .with_alarm(Alarm::new(Duration::minutes(15)));

            let out = event.serialize();
            assert_eq!(out.matches("BEGIN:VALARM").count(), 3);
            assert_eq!(out.matches("END:VALARM").count(), 3);

            let first = out.find("TRIGGER:-PT0D1H0M").unwrap();
            let second = out.find("TRIGGER:-PT0D0H30M").unwrap();
            let third = out.find("TRIGGER:-PT0D0H15M").unwrap();
            assert!(first < second && second < third);

            let last_alarm_end = out.rfind("END:VALARM").unwrap();
            assert!(last_alarm_end < out.rfind("END:VEVENT").unwrap());
        }

        #[test]
        fn serialization_is_idempotent() {
            let event = fixture_event().with_categories("Badminton");
            assert_eq!(event.serialize(), event.serialize());
        }
    }

    mod serde_surface {
        use super::*;

        #[test]
        fn json_roundtrip() {
            let event = fixture_event()
                .with_location("Venue")
                .with_description("a\r\nb")
                .with_alarm(Alarm::new(Duration::minutes(60)));
            let json = serde_json::to_string(&event).unwrap();
            let parsed: Event = serde_json::from_str(&json).unwrap();
            assert_eq!(event, parsed);
        }

        #[test]
        fn all_fields_are_visible_to_encoders() {
            let value = serde_json::to_value(fixture_event().with_all_day(true)).unwrap();
            assert_eq!(value["uid"], "match-42");
            assert_eq!(value["priority"], "normal");
            assert_eq!(value["transparency"], "OPAQUE");
            assert_eq!(value["all_day_event"], true);
            assert!(value["description"].is_string());
        }
    }
}
