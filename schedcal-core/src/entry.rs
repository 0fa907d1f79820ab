//! The canonical schedule entry model.

use std::cmp::Ordering;

/// One scheduled period (or, after merging, a run of consecutive periods).
///
/// Identity is the (week_cycle, weekday, period, room, title) tuple;
/// `teacher` and `duration_periods` never take part in equality or
/// ordering. The teacher does participate in the merge-adjacency test,
/// so two back-to-back periods of the same subject taught by different
/// people stay separate entries.
#[derive(Debug, Clone)]
pub struct ClassEntry {
    /// Display title, post-canonicalization. May carry a bracketed
    /// class-type tag and, in teacher mode, a trailing group name.
    pub title: String,
    /// Week-cycle code, 0..=3 (two numerator and two denominator weeks).
    pub week_cycle: u8,
    /// Room identifier, opaque.
    pub room: String,
    /// Weekday, 0 = Monday.
    pub weekday: u8,
    /// Zero-based period ordinal within the teaching day.
    pub period: u8,
    /// Number of consecutive periods this entry spans.
    pub duration_periods: u8,
    /// Teacher full name, may be empty.
    pub teacher: String,
}

impl ClassEntry {
    pub fn new(
        title: String,
        week_cycle: u8,
        room: String,
        weekday: u8,
        period: u8,
        teacher: String,
    ) -> Self {
        ClassEntry {
            title,
            week_cycle,
            room,
            weekday,
            period,
            duration_periods: 1,
            teacher,
        }
    }

    /// The identity tuple used for both ordering and equality.
    ///
    /// Period is the last ordered dimension before room/title, so after
    /// sorting, consecutive periods of the same class land next to each
    /// other and the merger only ever has to look one element ahead.
    pub fn identity_key(&self) -> (u8, u8, u8, &str, &str) {
        (
            self.week_cycle,
            self.weekday,
            self.period,
            &self.room,
            &self.title,
        )
    }

    /// Whether `other` is the same class in the directly preceding or
    /// following period slot.
    pub fn is_consecutive_with(&self, other: &ClassEntry) -> bool {
        self.title == other.title
            && self.week_cycle == other.week_cycle
            && self.weekday == other.weekday
            && self.room == other.room
            && self.teacher == other.teacher
            && self.period.abs_diff(other.period) == 1
    }
}

impl PartialEq for ClassEntry {
    fn eq(&self, other: &Self) -> bool {
        self.identity_key() == other.identity_key()
    }
}

impl Eq for ClassEntry {}

impl PartialOrd for ClassEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ClassEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity_key().cmp(&other.identity_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(week_cycle: u8, weekday: u8, period: u8) -> ClassEntry {
        ClassEntry::new(
            "МПСиС [Лек]".to_string(),
            week_cycle,
            "4304".to_string(),
            weekday,
            period,
            "Иванов Иван Иванович".to_string(),
        )
    }

    #[test]
    fn test_identity_ignores_teacher_and_duration() {
        let a = entry(0, 1, 2);
        let mut b = a.clone();
        b.teacher = "Петров Пётр Петрович".to_string();
        b.duration_periods = 3;
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_ordering_is_week_day_period_first() {
        let mut list = vec![entry(1, 0, 0), entry(0, 2, 0), entry(0, 0, 3), entry(0, 0, 1)];
        list.sort();
        let keys: Vec<_> = list
            .iter()
            .map(|e| (e.week_cycle, e.weekday, e.period))
            .collect();
        assert_eq!(keys, vec![(0, 0, 1), (0, 0, 3), (0, 2, 0), (1, 0, 0)]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut list = vec![entry(3, 4, 0), entry(0, 0, 0), entry(2, 1, 5)];
        list.sort();
        let once = list.clone();
        list.sort();
        assert_eq!(list, once);
    }

    #[test]
    fn test_consecutive_requires_all_fields_and_step_of_one() {
        let base = entry(0, 1, 2);

        assert!(base.is_consecutive_with(&entry(0, 1, 3)));
        assert!(base.is_consecutive_with(&entry(0, 1, 1)));
        assert!(!base.is_consecutive_with(&entry(0, 1, 4)));
        assert!(!base.is_consecutive_with(&entry(0, 1, 2)));
        assert!(!base.is_consecutive_with(&entry(1, 1, 3)));
        assert!(!base.is_consecutive_with(&entry(0, 2, 3)));

        let mut other_room = entry(0, 1, 3);
        other_room.room = "1202".to_string();
        assert!(!base.is_consecutive_with(&other_room));

        let mut other_teacher = entry(0, 1, 3);
        other_teacher.teacher = "Петров Пётр Петрович".to_string();
        assert!(!base.is_consecutive_with(&other_teacher));
    }
}
