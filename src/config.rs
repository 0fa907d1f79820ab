//! Configuration for the schedule pipeline.
//!
//! Every option is an explicit named field with its default spelled out
//! next to it. An optional TOML file overrides fields one by one; there
//! is no nested dictionary merging.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

/// Whose schedule to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Scan several groups for one teacher's periods.
    Educator,
    /// Full schedule of a single group.
    Student,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Operating mode; the `--mode` flag overrides it.
    #[serde(default = "default_mode")]
    pub mode: Mode,

    /// Teacher full name, required in educator mode.
    pub educator: Option<String>,

    /// Groups to scan in educator mode.
    #[serde(default)]
    pub groups: Vec<String>,

    /// Group name for student mode; the `--group` flag overrides it.
    pub group: Option<String>,

    /// Length of one academic hour, minutes.
    #[serde(default = "default_academic_hour")]
    pub academic_hour_minutes: u32,

    /// Break between periods, minutes.
    #[serde(default = "default_short_break")]
    pub short_break_minutes: u32,

    /// The long break after the second period, minutes.
    #[serde(default = "default_long_break")]
    pub long_break_minutes: u32,

    /// First teaching day as "DD-MM-YYYY"; inferred from the feed's
    /// semester label when absent.
    pub semester_starts_at: Option<String>,

    /// Long discipline name → short alias.
    #[serde(default)]
    pub title_aliases: HashMap<String, String>,

    /// Number of four-week repetitions per event (4 covers a 16-week
    /// semester, 5 adds weeks 17-18).
    #[serde(default = "default_repeat_count")]
    pub repeat_count: u32,

    /// Output ics path.
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// Feed endpoint.
    #[serde(default = "default_feed_url")]
    pub feed_url: String,

    /// Raw Cookie header value for the feed, when it needs one.
    pub cookie: Option<String>,

    /// Attach a display reminder to every event.
    #[serde(default = "default_true")]
    pub alarm_enabled: bool,

    /// Reminder lead time, minutes.
    #[serde(default = "default_alarm_minutes")]
    pub alarm_minutes_before: u32,

    /// Bare discipline names to drop from the schedule.
    #[serde(default)]
    pub excluded_disciplines: HashSet<String>,

    /// Put the teacher's name in the event description.
    #[serde(default = "default_true")]
    pub teacher_in_description: bool,

    /// Fixed text wrapped around every event title.
    pub title_prefix: Option<String>,
    pub title_suffix: Option<String>,
}

fn default_mode() -> Mode {
    Mode::Student
}

fn default_academic_hour() -> u32 {
    40
}

fn default_short_break() -> u32 {
    10
}

fn default_long_break() -> u32 {
    40
}

fn default_repeat_count() -> u32 {
    5
}

fn default_output_file() -> PathBuf {
    PathBuf::from("schedule.ics")
}

fn default_feed_url() -> String {
    "https://miet.ru/schedule/data".to_string()
}

fn default_true() -> bool {
    true
}

fn default_alarm_minutes() -> u32 {
    15
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: default_mode(),
            educator: None,
            groups: Vec::new(),
            group: None,
            academic_hour_minutes: default_academic_hour(),
            short_break_minutes: default_short_break(),
            long_break_minutes: default_long_break(),
            semester_starts_at: None,
            title_aliases: HashMap::new(),
            repeat_count: default_repeat_count(),
            output_file: default_output_file(),
            feed_url: default_feed_url(),
            cookie: None,
            alarm_enabled: true,
            alarm_minutes_before: default_alarm_minutes(),
            excluded_disciplines: HashSet::new(),
            teacher_in_description: true,
            title_prefix: None,
            title_suffix: None,
        }
    }
}

impl Config {
    /// Default config location (~/.config/schedcal/config.toml).
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("schedcal");
        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicitly passed path must exist and parse; a missing file at
    /// the default location just means defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Config> {
        let path = match explicit_path {
            Some(p) => p.to_path_buf(),
            None => {
                let p = Self::default_path()?;
                if !p.exists() {
                    return Ok(Config::default());
                }
                p
            }
        };

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

        Ok(config)
    }

    /// Parse the configured semester start date, if any.
    pub fn semester_start(&self) -> Result<Option<NaiveDate>> {
        match &self.semester_starts_at {
            Some(s) => {
                let date = NaiveDate::parse_from_str(s, "%d-%m-%Y").with_context(|| {
                    format!("Invalid semester_starts_at '{}' (expected DD-MM-YYYY)", s)
                })?;
                Ok(Some(date))
            }
            None => Ok(None),
        }
    }
}
