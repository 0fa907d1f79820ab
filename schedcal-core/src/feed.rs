//! Wire types for the raw timetable feed.
//!
//! The feed is a JSON document with a `Data` array of per-period records
//! and a `Semestr` label naming the semester the schedule belongs to.
//! Field names follow the feed, so everything here is `rename`d.
//!
//! Records occasionally arrive with missing sub-objects; those are kept
//! as `Option` so normalization can skip them instead of failing the
//! whole response.

use serde::Deserialize;

/// One decoded feed response for a single group.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedResponse {
    /// Per-period class records.
    #[serde(rename = "Data", default)]
    pub records: Vec<FeedRecord>,

    /// Semester label, e.g. "Осенний семестр 2025/2026".
    #[serde(rename = "Semestr", default)]
    pub semester: Option<String>,
}

/// One raw per-period record.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedRecord {
    #[serde(rename = "Class")]
    pub class: Option<FeedClass>,

    #[serde(rename = "Room")]
    pub room: Option<FeedRoom>,

    /// 1-based weekday ordinal (1 = Monday).
    #[serde(rename = "Day")]
    pub day: Option<u8>,

    /// Week-cycle ordinal, 0..=3.
    #[serde(rename = "DayNumber")]
    pub week_cycle: Option<u8>,

    #[serde(rename = "Time")]
    pub time: Option<FeedTime>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedClass {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "TeacherFull", default)]
    pub teacher: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedRoom {
    #[serde(rename = "Name")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedTime {
    /// 1-based period ordinal within the day.
    #[serde(rename = "Code")]
    pub code: Option<u8>,
}
