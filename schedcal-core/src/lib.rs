//! Core types for the schedcal pipeline.
//!
//! This crate holds everything between a decoded timetable feed and the
//! finished ics text:
//! - `feed` — wire types for the raw timetable feed
//! - `entry` — the canonical [`ClassEntry`] model
//! - `naming` — title canonicalization against an alias map
//! - `normalize` — raw records → canonical entries, per operating mode
//! - `merge` — collapsing runs of back-to-back identical periods
//! - `semester` — semester start inference from the feed's label
//! - `placement` — absolute start/end times for an entry
//! - `ics` — recurring calendar events for the merged schedule
//!
//! Fetching the feed and reading configuration stay in the CLI; the
//! pipeline here is pure and fully synchronous.

pub mod entry;
pub mod error;
pub mod feed;
pub mod ics;
pub mod merge;
pub mod naming;
pub mod normalize;
pub mod placement;
pub mod semester;

pub use entry::ClassEntry;
pub use error::{ScheduleError, ScheduleResult};
pub use feed::{FeedRecord, FeedResponse};
