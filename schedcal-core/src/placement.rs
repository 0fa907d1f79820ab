//! Absolute start/end times for a schedule entry.
//!
//! The schedule repeats on a four-week cycle (two numerator and two
//! denominator weeks). Given the semester's first teaching day, each
//! entry's (week cycle, weekday, period) maps onto a concrete first
//! occurrence; the calendar layer then repeats it every four weeks.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::entry::ClassEntry;
use crate::error::{ScheduleError, ScheduleResult};

/// First period of the day starts at 09:00.
const DAY_START_HOUR: i64 = 9;

/// Maps entries onto absolute first-occurrence timestamps.
#[derive(Debug, Clone)]
pub struct PlacementEngine {
    /// First teaching day of the semester.
    start_date: NaiveDate,
    /// Weekday of the first teaching day, 0 = Monday.
    start_weekday: u8,
    /// Length of one academic hour, minutes. A period is two of these.
    academic_hour: i64,
    /// Break between periods, minutes.
    short_break: i64,
    /// The single long break after the second period, minutes.
    long_break: i64,
}

impl PlacementEngine {
    pub fn new(start_date: NaiveDate, academic_hour: u32, short_break: u32, long_break: u32) -> Self {
        PlacementEngine {
            start_date,
            start_weekday: start_date.weekday().num_days_from_monday() as u8,
            academic_hour: i64::from(academic_hour),
            short_break: i64::from(short_break),
            long_break: i64::from(long_break),
        }
    }

    /// Compute the first occurrence (start, end) for an entry.
    pub fn first_occurrence(&self, entry: &ClassEntry) -> ScheduleResult<(NaiveDateTime, NaiveDateTime)> {
        let day_offset = i64::from(entry.weekday) - i64::from(self.start_weekday);

        // A first-numerator-week class whose weekday already passed
        // within the semester's opening partial week first happens one
        // full cycle later.
        let week_offset = if entry.week_cycle == 0 && entry.weekday < self.start_weekday {
            i64::from(entry.week_cycle + 4) * 7
        } else {
            i64::from(entry.week_cycle) * 7
        };

        let first_date = self
            .start_date
            .checked_add_signed(Duration::days(week_offset + day_offset))
            .ok_or_else(|| {
                ScheduleError::Placement(format!(
                    "first occurrence out of range for '{}'",
                    entry.title
                ))
            })?;

        let start = first_date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| ScheduleError::Placement("invalid day start".to_string()))?
            + Duration::hours(DAY_START_HOUR)
            + Duration::minutes(self.start_offset_minutes(entry.period));
        let end = start + Duration::minutes(self.span_minutes(entry.duration_periods));

        Ok((start, end))
    }

    /// Minutes from 09:00 to the start of the given period.
    fn start_offset_minutes(&self, period: u8) -> i64 {
        let pair = self.period_minutes();
        let mut offset = i64::from(period) * (pair + self.short_break);
        // One long break replaces the short one after the second period
        // of the day. Earlier revisions disagreed between `>= 2` and
        // `> 2`; `>= 2` (third period onward shifted) is the behavior
        // kept here.
        if period >= 2 {
            offset += self.long_break - self.short_break;
        }
        offset
    }

    /// Total minutes a merged entry occupies, breaks included.
    fn span_minutes(&self, duration_periods: u8) -> i64 {
        let duration = i64::from(duration_periods);
        duration * self.period_minutes() + (duration - 1) * self.short_break
    }

    /// One period is two academic hours.
    fn period_minutes(&self) -> i64 {
        self.academic_hour * 2
    }
}
