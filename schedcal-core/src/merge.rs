//! Collapsing runs of back-to-back identical periods.

use crate::entry::ClassEntry;

/// Merge consecutive periods of the same class into single multi-period
/// entries.
///
/// The list is sorted by identity key first. Period is the last ordered
/// dimension of the key within a (cycle, weekday) bucket, so every
/// mergeable run lands contiguously and a single forward scan suffices:
/// an accumulator entry absorbs each neighbor that continues the run
/// and is flushed to the output when the run breaks. A run of N periods
/// comes out as one entry with `duration_periods == N`.
///
/// Entries differing in title, week cycle, weekday, room, or teacher
/// never merge, however close their periods are. A gap (a free period
/// or another class in between) also breaks the run.
pub fn merge_entries(mut entries: Vec<ClassEntry>) -> Vec<ClassEntry> {
    entries.sort();

    let mut merged: Vec<ClassEntry> = Vec::with_capacity(entries.len());
    let mut run: Option<ClassEntry> = None;

    for entry in entries {
        match run.take() {
            Some(mut acc) => {
                if continues_run(&acc, &entry) {
                    acc.duration_periods += 1;
                    run = Some(acc);
                } else {
                    merged.push(acc);
                    run = Some(entry);
                }
            }
            None => run = Some(entry),
        }
    }

    if let Some(acc) = run {
        merged.push(acc);
    }

    merged
}

/// Whether `entry` extends the accumulated run by one more period.
///
/// Same adjacency fields as [`ClassEntry::is_consecutive_with`], but
/// the period must sit exactly one past the run's current end — post-
/// sort the continuation is always on the high side.
fn continues_run(acc: &ClassEntry, entry: &ClassEntry) -> bool {
    entry.title == acc.title
        && entry.week_cycle == acc.week_cycle
        && entry.weekday == acc.weekday
        && entry.room == acc.room
        && entry.teacher == acc.teacher
        && entry.period == acc.period + acc.duration_periods
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, cycle: u8, weekday: u8, period: u8) -> ClassEntry {
        ClassEntry::new(
            title.to_string(),
            cycle,
            "4304".to_string(),
            weekday,
            period,
            "Иванов И.И.".to_string(),
        )
    }

    #[test]
    fn test_pair_merges_into_one() {
        let merged = merge_entries(vec![entry("МПСиС", 0, 1, 2), entry("МПСиС", 0, 1, 1)]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].period, 1);
        assert_eq!(merged[0].duration_periods, 2);
    }

    #[test]
    fn test_run_of_n_collapses_to_duration_n() {
        let run: Vec<_> = (0..4).rev().map(|p| entry("МПСиС", 1, 3, p)).collect();
        let merged = merge_entries(run);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].period, 0);
        assert_eq!(merged[0].duration_periods, 4);
    }

    #[test]
    fn test_gap_breaks_the_run() {
        let merged = merge_entries(vec![entry("МПСиС", 0, 1, 0), entry("МПСиС", 0, 1, 2)]);
        assert_eq!(merged.len(), 2);
        assert!(merged.iter().all(|e| e.duration_periods == 1));
    }

    #[test]
    fn test_differing_fields_never_merge() {
        // Same period proximity, one differing field each.
        let cases = vec![
            vec![entry("МПСиС", 0, 1, 0), entry("FV", 0, 1, 1)],
            vec![entry("МПСиС", 0, 1, 0), entry("МПСиС", 1, 1, 1)],
            vec![entry("МПСиС", 0, 1, 0), entry("МПСиС", 0, 2, 1)],
        ];
        for case in cases {
            assert_eq!(merge_entries(case).len(), 2);
        }

        let mut other_room = entry("МПСиС", 0, 1, 1);
        other_room.room = "1202".to_string();
        assert_eq!(
            merge_entries(vec![entry("МПСиС", 0, 1, 0), other_room]).len(),
            2
        );

        let mut other_teacher = entry("МПСиС", 0, 1, 1);
        other_teacher.teacher = "Петров П.П.".to_string();
        assert_eq!(
            merge_entries(vec![entry("МПСиС", 0, 1, 0), other_teacher]).len(),
            2
        );
    }

    #[test]
    fn test_independent_runs_merge_independently() {
        let merged = merge_entries(vec![
            entry("МПСиС", 0, 1, 1),
            entry("FV", 0, 2, 3),
            entry("МПСиС", 0, 1, 2),
            entry("FV", 0, 2, 2),
            entry("Схемотехника", 2, 4, 0),
        ]);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].title, "МПСиС");
        assert_eq!(merged[0].duration_periods, 2);
        assert_eq!(merged[1].title, "FV");
        assert_eq!(merged[1].duration_periods, 2);
        assert_eq!(merged[2].duration_periods, 1);
    }

    #[test]
    fn test_output_has_no_adjacent_pairs_left() {
        let merged = merge_entries(vec![
            entry("МПСиС", 0, 1, 0),
            entry("МПСиС", 0, 1, 1),
            entry("МПСиС", 0, 1, 3),
            entry("МПСиС", 0, 1, 4),
        ]);
        assert_eq!(merged.len(), 2);
        for pair in merged.windows(2) {
            assert!(!pair[0].is_consecutive_with(&pair[1]));
        }
    }
}
