//! Semester start inference from the feed's semester label.
//!
//! The feed names its semester with a string like
//! "Осенний семестр 2025/2026". When no explicit start date is
//! configured, the first teaching day is derived from that label:
//! - autumn: September 1 of the first year, rolled forward to Monday
//!   when it lands on a weekend;
//! - spring: the second Monday of February of the second year.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::{ScheduleError, ScheduleResult};

/// Derive the semester's first teaching day from its label.
pub fn infer_semester_start(label: &str) -> ScheduleResult<NaiveDate> {
    let (first_year, second_year) = parse_year_pair(label)?;

    let date = if label.starts_with("Осенний") {
        let candidate = NaiveDate::from_ymd_opt(first_year, 9, 1)
            .ok_or_else(|| ScheduleError::SemesterLabel(label.to_string()))?;
        if candidate.weekday().num_days_from_monday() >= 5 {
            candidate + Duration::days(7 - i64::from(candidate.weekday().num_days_from_monday()))
        } else {
            candidate
        }
    } else {
        let mut candidate = NaiveDate::from_ymd_opt(second_year, 2, 1)
            .ok_or_else(|| ScheduleError::SemesterLabel(label.to_string()))?;
        while candidate.weekday() != Weekday::Mon {
            candidate += Duration::days(1);
        }
        candidate + Duration::days(7)
    };

    Ok(date)
}

/// Extract the "YYYY/YYYY" academic-year pair from the label.
fn parse_year_pair(label: &str) -> ScheduleResult<(i32, i32)> {
    let err = || ScheduleError::SemesterLabel(label.to_string());

    let pair = label.rsplit(' ').next().ok_or_else(err)?;
    let (first, second) = pair.split_once('/').ok_or_else(err)?;

    Ok((
        first.parse().map_err(|_| err())?,
        second.parse().map_err(|_| err())?,
    ))
}
