//! Shared context for one detection pass.

use chrono::{Duration, NaiveDate};

use tend_core::types::{DayEntry, Habit};

use crate::timeline;

/// Everything the detector passes need, computed once per call.
///
/// `recent` covers the lookback window ending today; `older` covers the
/// matching prior window of equal length immediately preceding it.
pub struct DetectionContext<'a> {
    pub entries: &'a [DayEntry],
    /// Non-resting habits only.
    pub habits: Vec<&'a Habit>,
    pub today: NaiveDate,
    pub lookback_days: u32,
    pub recent: Vec<(&'a DayEntry, NaiveDate)>,
    pub older: Vec<(&'a DayEntry, NaiveDate)>,
}

impl<'a> DetectionContext<'a> {
    pub fn build(
        entries: &'a [DayEntry],
        habits: &'a [Habit],
        lookback_days: u32,
        today: NaiveDate,
    ) -> Self {
        let span = Duration::days(i64::from(lookback_days));
        let recent_from = today - span + Duration::days(1);
        let older_to = recent_from - Duration::days(1);
        let older_from = older_to - span + Duration::days(1);

        Self {
            entries,
            habits: habits.iter().filter(|h| !h.resting).collect(),
            today,
            lookback_days,
            recent: timeline::entries_in_range(entries, recent_from, today),
            older: timeline::entries_in_range(entries, older_from, older_to),
        }
    }

    /// Dates in the recent window where the habit was done.
    pub fn recent_done(&self, habit_id: &str) -> Vec<NaiveDate> {
        timeline::done_dates_in(&self.recent, habit_id)
    }
}
