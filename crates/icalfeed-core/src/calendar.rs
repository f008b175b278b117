//! The top-level publishable calendar.
//!
//! A [`Calendar`] is a named collection of events rendered as one
//! `VCALENDAR` block, the unit that gets published to calendar clients.

use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::write::{CRLF, push_prop};

/// Default product identifier advertised on the `PRODID:` line.
pub const DEFAULT_PRODUCT_ID: &str = "-//icalfeed/iCalendar 2.0//EN";

/// Default republish interval advertised to clients: one day.
pub const DEFAULT_TIME_TO_LIVE_MINUTES: u32 = 1440;

/// A named, publishable collection of events.
///
/// Events are exclusively owned and serialized in insertion order. Any
/// field value, including empty strings and an empty event list, is legal;
/// serialization is total and never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    /// Identifies the producing application.
    pub product_id: String,
    /// Display name shown in client calendar lists.
    pub name: String,
    /// Free-text description of the calendar.
    pub description: String,
    /// Republish/refresh interval advertised to clients, in minutes.
    /// Emitted verbatim inside `X-PUBLISHED-TTL:PT<minutes>M`.
    pub time_to_live_minutes: u32,
    /// The events in this calendar, in publication order.
    pub events: Vec<Event>,
}

impl Default for Calendar {
    fn default() -> Self {
        Self {
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            name: String::new(),
            description: String::new(),
            time_to_live_minutes: DEFAULT_TIME_TO_LIVE_MINUTES,
            events: Vec::new(),
        }
    }
}

impl Calendar {
    /// Creates an empty calendar with default product id and TTL.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calendar containing a single event.
    pub fn with_event(event: Event) -> Self {
        Self {
            events: vec![event],
            ..Self::default()
        }
    }

    /// Builder method to set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method to set the advertised TTL in minutes.
    pub fn with_time_to_live(mut self, minutes: u32) -> Self {
        self.time_to_live_minutes = minutes;
        self
    }

    /// Adds an event at the end of the publication order.
    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Serializes this calendar as a complete `VCALENDAR` document.
    ///
    /// The fixed header (product id, version, publish method, name,
    /// description, TTL) is followed by every event's block in order. The
    /// closing `END:VCALENDAR` line carries NO trailing terminator; unlike
    /// alarm blocks, the calendar block is not self-terminating. The
    /// `VERSION` and `METHOD` lines are required by Outlook to pick up
    /// alarm settings.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        out.push_str("BEGIN:VCALENDAR");
        out.push_str(CRLF);
        push_prop(&mut out, "PRODID", &self.product_id);
        push_prop(&mut out, "VERSION", "2.0");
        push_prop(&mut out, "METHOD", "PUBLISH");
        push_prop(&mut out, "X-WR-CALNAME", &self.name);
        push_prop(&mut out, "X-WR-CALDESC", &self.description);
        push_prop(
            &mut out,
            "X-PUBLISHED-TTL",
            &format!("PT{}M", self.time_to_live_minutes),
        );
        for event in &self.events {
            out.push_str(&event.serialize());
        }
        out.push_str("END:VCALENDAR");
        out
    }
}

impl std::fmt::Display for Calendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialize())
    }
}
