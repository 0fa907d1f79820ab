//! ICS materialization for the merged schedule.
//!
//! Each merged entry becomes one VEVENT carrying its first occurrence
//! and a weekly RRULE with a four-week interval, so the two
//! numerator/denominator week pairs repeat for the configured number of
//! cycles. Timestamps are emitted as floating local times; the feed's
//! times are campus-local and carry no zone.

use chrono::NaiveDateTime;
use icalendar::{Alarm, Calendar, Component, EventLike, Trigger};
use uuid::Uuid;

use crate::entry::ClassEntry;
use crate::error::ScheduleResult;
use crate::placement::PlacementEngine;

/// Presentation options for the emitted calendar.
#[derive(Debug, Clone)]
pub struct CalendarOptions {
    /// Number of four-week repetitions each event gets.
    pub repeat_count: u32,
    /// Display-alarm lead time in minutes; `None` disables alarms.
    pub alarm_minutes_before: Option<i64>,
    /// Put the teacher's name in the event description.
    pub teacher_in_description: bool,
    /// Fixed text wrapped around every event title.
    pub title_prefix: Option<String>,
    pub title_suffix: Option<String>,
}

/// Build the full ics text for a merged schedule.
pub fn materialize(
    entries: &[ClassEntry],
    placement: &PlacementEngine,
    options: &CalendarOptions,
) -> ScheduleResult<String> {
    let mut cal = Calendar::new();

    for entry in entries {
        let (start, end) = placement.first_occurrence(entry)?;
        cal.push(build_event(entry, start, end, options));
    }

    Ok(rewrite_prodid(&cal.done().to_string()))
}

fn build_event(
    entry: &ClassEntry,
    start: NaiveDateTime,
    end: NaiveDateTime,
    options: &CalendarOptions,
) -> icalendar::Event {
    let title = format!(
        "{}{}{}",
        options.title_prefix.as_deref().unwrap_or(""),
        entry.title,
        options.title_suffix.as_deref().unwrap_or("")
    );

    let mut event = icalendar::Event::new();
    event.uid(&Uuid::new_v4().to_string());
    event.summary(&title);
    event.location(&entry.room);

    // Floating local datetimes: no Z, no TZID.
    event.add_property("DTSTART", start.format("%Y%m%dT%H%M%S").to_string());
    event.add_property("DTEND", end.format("%Y%m%dT%H%M%S").to_string());

    if options.teacher_in_description && !entry.teacher.is_empty() {
        event.description(&entry.teacher);
    }

    event.add_property(
        "RRULE",
        format!("FREQ=WEEKLY;INTERVAL=4;COUNT={}", options.repeat_count),
    );

    if let Some(minutes) = options.alarm_minutes_before {
        let trigger = Trigger::before_start(chrono::Duration::minutes(minutes));
        let text = format!("Reminder: {} in {}", title, entry.room);
        event.alarm(Alarm::display(&text, trigger));
    }

    event.done()
}

/// Replace the icalendar crate's PRODID with ours.
fn rewrite_prodid(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());
    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:-//schedcal//Timetable//RU\r\n");
        } else {
            result.push_str(line);
            result.push_str("\r\n");
        }
    }
    result
}
