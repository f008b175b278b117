//! Demo fixtures calendar.
//!
//! Builds a small league-fixtures calendar: one completed match with a
//! result description and one upcoming match with a reminder alarm. Used by
//! the CLI so the feed shapes can be exercised without a real data source.

use chrono::{DateTime, Duration, Utc};

use icalfeed_core::{Alarm, AlarmAction, Calendar, Event, Priority, Transparency};

/// Evening throw-up time for demo fixtures: 19:30 UTC.
fn fixture_start(now: DateTime<Utc>, days_ahead: i64) -> DateTime<Utc> {
    (now + Duration::days(days_ahead))
        .date_naive()
        .and_hms_opt(19, 30, 0)
        .expect("valid time")
        .and_utc()
}

/// Builds the demo fixtures calendar for the given league.
///
/// `now` anchors the fixture dates and event timestamps, so output is a
/// pure function of its inputs.
pub fn demo_calendar(league: &str, now: DateTime<Utc>) -> Calendar {
    let mut calendar = Calendar::new()
        .with_name(league)
        .with_description(format!(
            "Fixtures and results of matches for the {league}"
        ));

    let start = fixture_start(now, 1);
    calendar.add_event(
        Event::new(
            format!("{league} Home Team vs Away Team"),
            "🏸 Home Team vs Away Team",
            start,
            start + Duration::minutes(150),
            now,
        )
        .with_location("Venue")
        .with_priority(Priority::Normal)
        .with_transparency(Transparency::Transparent)
        .with_categories("Badminton,Completed")
        .with_description("\nSCORE: 3-2\nHome team WINS\n"),
    );

    let start = fixture_start(now, 8);
    calendar.add_event(
        Event::new(
            format!("{league} Away Team vs Home Team"),
            "🏸 Away Team vs Home Team",
            start,
            start + Duration::minutes(150),
            now,
        )
        .with_location("Other Venue")
        .with_priority(Priority::Normal)
        .with_transparency(Transparency::Opaque)
        .with_categories("Badminton")
        .with_description("\n")
        .with_alarm(
            Alarm::new(Duration::minutes(60))
                .with_action(AlarmAction::Display)
                .with_description("Reminder"),
        ),
    );

    calendar
}
