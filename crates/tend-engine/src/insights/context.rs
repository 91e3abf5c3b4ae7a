//! Shared context for one insight generation pass.

use chrono::{Duration, NaiveDate};

use tend_core::types::{DayEntry, Habit};

use crate::timeline;

/// Windowed views the candidate passes share, computed once per call.
pub struct InsightContext<'a> {
    /// Non-resting habits only.
    pub habits: Vec<&'a Habit>,
    pub today: NaiveDate,
    /// Last 7 days, inclusive of today.
    pub week: Vec<(&'a DayEntry, NaiveDate)>,
    /// Last 14 days, inclusive of today.
    pub fortnight: Vec<(&'a DayEntry, NaiveDate)>,
}

impl<'a> InsightContext<'a> {
    pub fn build(entries: &'a [DayEntry], habits: &'a [Habit], today: NaiveDate) -> Self {
        Self {
            habits: habits.iter().filter(|h| !h.resting).collect(),
            today,
            week: timeline::entries_in_range(entries, today - Duration::days(6), today),
            fortnight: timeline::entries_in_range(entries, today - Duration::days(13), today),
        }
    }

    /// Done count for one habit over the last 7 days.
    pub fn week_done(&self, habit_id: &str) -> usize {
        timeline::done_dates_in(&self.week, habit_id).len()
    }
}
