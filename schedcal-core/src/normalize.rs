//! Raw feed records → canonical entries.
//!
//! The feed speaks in 1-based ordinals for weekday and period; the
//! canonical model is 0-based throughout. Normalization is where that
//! conversion happens, together with title canonicalization and the
//! per-mode record selection.

use std::collections::HashMap;

use crate::entry::ClassEntry;
use crate::error::{ScheduleError, ScheduleResult};
use crate::feed::FeedRecord;
use crate::naming::canonical_title;

/// Convert one raw record into a canonical entry.
///
/// Returns `None` when any expected field is missing; the caller
/// decides whether that is skippable (it is, in both modes — selection
/// happens on well-formed records only).
fn normalize_record(
    record: &FeedRecord,
    aliases: &HashMap<String, String>,
) -> Option<ClassEntry> {
    let class = record.class.as_ref()?;
    let room = record.room.as_ref()?;
    let day = record.day?;
    let week_cycle = record.week_cycle?;
    let period = record.time.as_ref()?.code?;

    // 1-based feed ordinals become 0-based.
    Some(ClassEntry::new(
        canonical_title(&class.name, aliases),
        week_cycle,
        room.name.clone(),
        day.checked_sub(1)?,
        period.checked_sub(1)?,
        class.teacher.clone(),
    ))
}

/// Direct mode: every well-formed record of a single group's schedule.
/// Malformed records are skipped silently.
pub fn entries_for_group(
    records: &[FeedRecord],
    aliases: &HashMap<String, String>,
) -> Vec<ClassEntry> {
    records
        .iter()
        .filter_map(|record| normalize_record(record, aliases))
        .collect()
}

/// Aggregate mode: scan several groups' schedules and keep only the
/// periods taught by `teacher`, tagging each title with the owning
/// group so otherwise-identical entries from different groups stay
/// distinct.
///
/// An empty result is fatal: there is nothing to schedule, and silently
/// writing an empty calendar would hide a misspelled teacher name.
pub fn entries_for_teacher(
    group_feeds: &[(String, Vec<FeedRecord>)],
    teacher: &str,
    aliases: &HashMap<String, String>,
) -> ScheduleResult<Vec<ClassEntry>> {
    let mut entries = Vec::new();

    for (group, records) in group_feeds {
        for record in records {
            let taught = record
                .class
                .as_ref()
                .is_some_and(|class| class.teacher == teacher);
            if !taught {
                continue;
            }
            if let Some(mut entry) = normalize_record(record, aliases) {
                entry.title = format!("{} {}", entry.title, group);
                entries.push(entry);
            }
        }
    }

    if entries.is_empty() {
        return Err(ScheduleError::NoClassesForTeacher {
            teacher: teacher.to_string(),
            groups: group_feeds.iter().map(|(g, _)| g.clone()).collect(),
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{FeedClass, FeedRoom, FeedTime};

    fn record(name: &str, teacher: &str, day: u8, cycle: u8, code: u8) -> FeedRecord {
        FeedRecord {
            class: Some(FeedClass {
                name: name.to_string(),
                teacher: teacher.to_string(),
            }),
            room: Some(FeedRoom {
                name: "4101".to_string(),
            }),
            day: Some(day),
            week_cycle: Some(cycle),
            time: Some(FeedTime { code: Some(code) }),
        }
    }

    #[test]
    fn test_ordinals_become_zero_based() {
        let aliases = HashMap::new();
        let entries = entries_for_group(&[record("Схемотехника", "Иванов И.И.", 3, 1, 2)], &aliases);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].weekday, 2);
        assert_eq!(entries[0].period, 1);
        assert_eq!(entries[0].week_cycle, 1);
        assert_eq!(entries[0].duration_periods, 1);
    }

    #[test]
    fn test_malformed_record_is_skipped() {
        let aliases = HashMap::new();
        let mut broken = record("Схемотехника", "Иванов И.И.", 1, 0, 1);
        broken.time = None;
        let entries = entries_for_group(
            &[broken, record("Схемотехника", "Иванов И.И.", 1, 0, 2)],
            &aliases,
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].period, 1);
    }

    #[test]
    fn test_teacher_mode_filters_and_tags_group() {
        let aliases = HashMap::new();
        let feeds = vec![
            (
                "ИВТ-24М".to_string(),
                vec![
                    record("Схемотехника", "Иванов И.И.", 1, 0, 1),
                    record("Схемотехника", "Петров П.П.", 1, 0, 2),
                ],
            ),
            (
                "ИВТ-34".to_string(),
                vec![record("Схемотехника", "Иванов И.И.", 2, 0, 1)],
            ),
        ];

        let entries = entries_for_teacher(&feeds, "Иванов И.И.", &aliases).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Схемотехника ИВТ-24М");
        assert_eq!(entries[1].title, "Схемотехника ИВТ-34");
    }

    #[test]
    fn test_teacher_mode_empty_result_is_fatal() {
        let aliases = HashMap::new();
        let feeds = vec![(
            "ИВТ-24М".to_string(),
            vec![record("Схемотехника", "Петров П.П.", 1, 0, 1)],
        )];

        let err = entries_for_teacher(&feeds, "Иванов И.И.", &aliases).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Иванов И.И."));
        assert!(msg.contains("ИВТ-24М"));
    }
}
