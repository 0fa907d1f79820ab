//! Error types for the schedule pipeline.

use thiserror::Error;

/// Errors that can occur while building a schedule.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Could not parse semester label '{0}'")]
    SemesterLabel(String),

    #[error("No classes found for teacher '{teacher}' in groups: {groups:?}")]
    NoClassesForTeacher { teacher: String, groups: Vec<String> },

    #[error("Placement error: {0}")]
    Placement(String),
}

/// Result type alias for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
