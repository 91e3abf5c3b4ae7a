//! Read-only views over the raw entry log.
//!
//! Every function here is pure. Entries with malformed date strings are
//! excluded from range filters rather than failing the pass.

use chrono::{Datelike, NaiveDate, Weekday};

use tend_core::types::{DayEntry, HabitState};

/// Parse an entry's `YYYY-MM-DD` date key. `None` for malformed dates.
pub fn entry_date(entry: &DayEntry) -> Option<NaiveDate> {
    parse_date(&entry.date)
}

/// Parse a `YYYY-MM-DD` date string. `None` for malformed input.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Entries whose date falls within `[from, to]`, sorted ascending by date.
/// Malformed dates are silently excluded.
pub fn entries_in_range<'a>(
    entries: &'a [DayEntry],
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<(&'a DayEntry, NaiveDate)> {
    let mut result: Vec<(&DayEntry, NaiveDate)> = entries
        .iter()
        .filter_map(|entry| entry_date(entry).map(|date| (entry, date)))
        .filter(|(_, date)| *date >= from && *date <= to)
        .collect();
    result.sort_by_key(|(_, date)| *date);
    result
}

/// Dates on which the habit was checked in as done, sorted ascending.
/// Scans the full history, skipping malformed dates.
pub fn done_dates(entries: &[DayEntry], habit_id: &str) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = entries
        .iter()
        .filter(|entry| entry.is_done(habit_id))
        .filter_map(entry_date)
        .collect();
    dates.sort();
    dates
}

/// Count entries in a windowed slice where the habit carries the given state.
pub fn count_state(window: &[(&DayEntry, NaiveDate)], habit_id: &str, state: HabitState) -> usize {
    window
        .iter()
        .filter(|(entry, _)| entry.state(habit_id) == Some(state))
        .count()
}

/// Dates within a windowed slice where the habit was done.
pub fn done_dates_in(window: &[(&DayEntry, NaiveDate)], habit_id: &str) -> Vec<NaiveDate> {
    window
        .iter()
        .filter(|(entry, _)| entry.is_done(habit_id))
        .map(|(_, date)| *date)
        .collect()
}

/// Day gaps between consecutive dates. Input must be sorted ascending.
pub fn gaps(dates: &[NaiveDate]) -> Vec<i64> {
    dates
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_days())
        .collect()
}

/// Length of the longest run of consecutive-day dates.
/// Input must be sorted ascending.
pub fn longest_run(dates: &[NaiveDate]) -> usize {
    if dates.is_empty() {
        return 0;
    }
    let mut longest = 1;
    let mut current = 1;
    for pair in dates.windows(2) {
        if (pair[1] - pair[0]).num_days() == 1 {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 1;
        }
    }
    longest
}

/// Partition dates into (weekday, weekend) counts. Weekend is Sat–Sun.
pub fn weekday_split(dates: &[NaiveDate]) -> (usize, usize) {
    let weekend = dates
        .iter()
        .filter(|date| matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
        .count();
    (dates.len() - weekend, weekend)
}

/// Days in the window with at least one habit checked in as done.
pub fn days_with_any_done(window: &[(&DayEntry, NaiveDate)]) -> usize {
    window
        .iter()
        .filter(|(entry, _)| entry.states.values().any(|s| *s == HabitState::Done))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tend_core::types::HabitState;

    fn entry(date: &str, habit_id: &str, state: HabitState) -> DayEntry {
        let mut e = DayEntry::new(date);
        e.states.insert(habit_id.to_string(), state);
        e
    }

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_malformed_dates_excluded() {
        let entries = vec![
            entry("2025-03-01", "h1", HabitState::Done),
            entry("not-a-date", "h1", HabitState::Done),
            entry("2025-03-03", "h1", HabitState::Done),
        ];
        let window = entries_in_range(&entries, date("2025-03-01"), date("2025-03-31"));
        assert_eq!(window.len(), 2);
        assert_eq!(done_dates(&entries, "h1").len(), 2);
    }

    #[test]
    fn test_entries_in_range_sorted_inclusive() {
        let entries = vec![
            entry("2025-03-05", "h1", HabitState::Done),
            entry("2025-03-01", "h1", HabitState::Done),
            entry("2025-02-28", "h1", HabitState::Done),
        ];
        let window = entries_in_range(&entries, date("2025-03-01"), date("2025-03-05"));
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].1, date("2025-03-01"));
        assert_eq!(window[1].1, date("2025-03-05"));
    }

    #[test]
    fn test_gaps() {
        let dates = vec![date("2025-03-01"), date("2025-03-02"), date("2025-03-10")];
        assert_eq!(gaps(&dates), vec![1, 8]);
    }

    #[test]
    fn test_longest_run() {
        let dates = vec![
            date("2025-03-01"),
            date("2025-03-02"),
            date("2025-03-03"),
            date("2025-03-07"),
            date("2025-03-08"),
        ];
        assert_eq!(longest_run(&dates), 3);
        assert_eq!(longest_run(&[]), 0);
    }

    #[test]
    fn test_weekday_split() {
        // 2025-03-01 is a Saturday, 2025-03-03 a Monday.
        let dates = vec![date("2025-03-01"), date("2025-03-02"), date("2025-03-03")];
        let (weekday, weekend) = weekday_split(&dates);
        assert_eq!(weekday, 1);
        assert_eq!(weekend, 2);
    }

    #[test]
    fn test_days_with_any_done() {
        let mut quiet = DayEntry::new("2025-03-02");
        quiet.states.insert("h1".to_string(), HabitState::NotDone);
        let entries = vec![entry("2025-03-01", "h1", HabitState::Done), quiet];
        let window = entries_in_range(&entries, date("2025-03-01"), date("2025-03-05"));
        assert_eq!(days_with_any_done(&window), 1);
    }
}
