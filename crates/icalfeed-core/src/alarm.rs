//! Alarm types for calendar events.
//!
//! An [`Alarm`] is a single notification attached to an event, rendered as a
//! `VALARM` block. It is the leaf component of the calendar model.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::write::{CRLF, push_prop};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// The action a calendar client takes when the alarm fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlarmAction {
    /// Show a visual reminder.
    #[default]
    Display,
    /// Play a sound.
    Audio,
    /// Send an email.
    Email,
}

impl AlarmAction {
    /// Returns the symbolic name emitted on the `ACTION:` line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Display => "DISPLAY",
            Self::Audio => "AUDIO",
            Self::Email => "EMAIL",
        }
    }
}

/// A notification attached to an event.
///
/// The trigger is the offset before the event at which the alarm fires.
/// Callers conventionally store "before" offsets; the sign of the stored
/// duration is not interpreted on output (see [`Alarm::serialize`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alarm {
    /// Offset before the event at which the alarm fires.
    ///
    /// Serialized over serde as total seconds, since [`chrono::Duration`]
    /// has no serde representation of its own.
    #[serde(with = "trigger_seconds")]
    pub trigger: Duration,
    /// What the client should do when the alarm fires.
    pub action: AlarmAction,
    /// Text shown (or sent) with the notification.
    pub description: String,
}

impl Default for Alarm {
    fn default() -> Self {
        Self {
            trigger: Duration::days(1),
            action: AlarmAction::default(),
            description: "Reminder".to_string(),
        }
    }
}

impl Alarm {
    /// Creates an alarm firing at the given offset before the event.
    pub fn new(trigger: Duration) -> Self {
        Self {
            trigger,
            ..Self::default()
        }
    }

    /// Builder method to set the action.
    pub fn with_action(mut self, action: AlarmAction) -> Self {
        self.action = action;
        self
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Serializes this alarm as a `VALARM` block.
    ///
    /// The trigger is decomposed into whole days plus the hour and minute
    /// remainders within the final day (hours 0-23, minutes 0-59), not total
    /// hours or total minutes. The `-P` prefix is a fixed literal: the
    /// format always presents the trigger as a "before" offset, so the sign
    /// of the stored duration is discarded.
    ///
    /// Unlike the event and calendar blocks, the closing `END:VALARM` line
    /// is itself CRLF-terminated, making alarm blocks self-terminating when
    /// concatenated.
    pub fn serialize(&self) -> String {
        let total_minutes = self.trigger.num_minutes().abs();
        let days = total_minutes / MINUTES_PER_DAY;
        let hours = total_minutes % MINUTES_PER_DAY / 60;
        let minutes = total_minutes % 60;

        let mut out = String::new();
        out.push_str("BEGIN:VALARM");
        out.push_str(CRLF);
        push_prop(&mut out, "TRIGGER", &format!("-PT{days}D{hours}H{minutes}M"));
        push_prop(&mut out, "ACTION", self.action.as_str());
        push_prop(&mut out, "DESCRIPTION", &self.description);
        out.push_str("END:VALARM");
        out.push_str(CRLF);
        out
    }
}

impl std::fmt::Display for Alarm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialize())
    }
}

mod trigger_seconds {
    //! Serde representation for the trigger duration: total seconds.

    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_i64(d.num_seconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let seconds = i64::deserialize(d)?;
        Ok(Duration::seconds(seconds))
    }
}
