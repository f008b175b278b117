//! Core types: calendars, events, alarms, iCalendar serialization

pub mod alarm;
pub mod calendar;
pub mod escape;
pub mod event;
pub mod tracing;
mod write;

pub use alarm::{Alarm, AlarmAction};
pub use calendar::Calendar;
pub use escape::escape_newlines;
pub use event::{BusyStatus, Event, Priority, Transparency};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
