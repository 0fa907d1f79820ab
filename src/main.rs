mod config;
mod feed;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use config::{Config, Mode};
use feed::FeedClient;
use schedcal_core::ics::{materialize, CalendarOptions};
use schedcal_core::merge::merge_entries;
use schedcal_core::naming::base_title;
use schedcal_core::normalize::{entries_for_group, entries_for_teacher};
use schedcal_core::placement::PlacementEngine;
use schedcal_core::semester::infer_semester_start;
use schedcal_core::{ClassEntry, FeedRecord};

#[derive(Parser)]
#[command(name = "schedcal")]
#[command(about = "Convert a university timetable feed into a recurring-event ics calendar")]
struct Cli {
    /// Operating mode: educator (teacher's schedule across groups) or
    /// student (one group's full schedule)
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Path to a TOML config file (defaults to ~/.config/schedcal/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Group name (student mode)
    #[arg(long)]
    group: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load(cli.config.as_deref())?;
    if let Some(mode) = cli.mode {
        cfg.mode = mode;
    }
    if let Some(group) = cli.group {
        cfg.group = Some(group);
    }

    run(cfg).await
}

async fn run(cfg: Config) -> Result<()> {
    let client = FeedClient::new(&cfg.feed_url, cfg.cookie.as_deref())?;

    // Fetch per mode. The semester label rides along in the same
    // response, so inferring the start date needs no extra round trip.
    let (entries, semester_label) = match cfg.mode {
        Mode::Educator => fetch_educator(&client, &cfg).await?,
        Mode::Student => fetch_student(&client, &cfg).await?,
    };

    let start_date = match cfg.semester_start()? {
        Some(date) => date,
        None => {
            let label = semester_label
                .context("Feed did not include a semester label; set semester_starts_at in the config")?;
            let date = infer_semester_start(&label)?;
            println!(
                "No semester start date configured.\n\
                 Inferred {} from the feed's label '{}' — check that this is right!",
                date.format("%d-%m-%Y"),
                label
            );
            date
        }
    };

    // Exclusion filter works on bare discipline names, with the group
    // suffix from educator mode stripped off.
    let entries: Vec<ClassEntry> = entries
        .into_iter()
        .filter(|e| {
            !cfg.excluded_disciplines
                .contains(base_title(&e.title, &cfg.groups))
        })
        .collect();

    let merged = merge_entries(entries);

    let placement = PlacementEngine::new(
        start_date,
        cfg.academic_hour_minutes,
        cfg.short_break_minutes,
        cfg.long_break_minutes,
    );
    let options = CalendarOptions {
        repeat_count: cfg.repeat_count,
        alarm_minutes_before: cfg
            .alarm_enabled
            .then_some(i64::from(cfg.alarm_minutes_before)),
        teacher_in_description: cfg.teacher_in_description,
        title_prefix: cfg.title_prefix.clone(),
        title_suffix: cfg.title_suffix.clone(),
    };

    let ics = materialize(&merged, &placement, &options)?;

    std::fs::write(&cfg.output_file, &ics)
        .with_context(|| format!("Failed to write {}", cfg.output_file.display()))?;

    println!(
        "Wrote {} events to {}",
        merged.len(),
        cfg.output_file.display()
    );

    Ok(())
}

/// Educator mode: scan every configured group's schedule for the
/// configured teacher's periods.
async fn fetch_educator(
    client: &FeedClient,
    cfg: &Config,
) -> Result<(Vec<ClassEntry>, Option<String>)> {
    let educator = cfg
        .educator
        .as_deref()
        .context("educator mode needs `educator` set in the config")?;
    if cfg.groups.is_empty() {
        anyhow::bail!("educator mode needs a non-empty `groups` list in the config");
    }

    let mut group_feeds: Vec<(String, Vec<FeedRecord>)> = Vec::new();
    let mut semester_label = None;

    for group in &cfg.groups {
        println!("Fetching schedule for {}...", group);
        let response = client.fetch_group(group).await?;
        if semester_label.is_none() {
            semester_label = response.semester;
        }
        group_feeds.push((group.clone(), response.records));
    }

    let entries = entries_for_teacher(&group_feeds, educator, &cfg.title_aliases)?;
    Ok((entries, semester_label))
}

/// Student mode: the full schedule of one group.
async fn fetch_student(
    client: &FeedClient,
    cfg: &Config,
) -> Result<(Vec<ClassEntry>, Option<String>)> {
    let group = cfg
        .group
        .as_deref()
        .context("student mode needs a group (set `group` in the config or pass --group)")?;

    println!("Fetching schedule for {}...", group);
    let response = client.fetch_group(group).await?;

    let entries = entries_for_group(&response.records, &cfg.title_aliases);
    Ok((entries, response.semester))
}
