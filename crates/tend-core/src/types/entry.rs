//! Daily entries: one record per calendar date.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::collections::FxHashMap;

/// Recorded state for one habit on one day.
///
/// A habit id absent from the day's map means "no data", which is distinct
/// from an explicit `NotDone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HabitState {
    Done,
    NotDone,
    ConsciousSkip,
}

impl HabitState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::NotDone => "not-done",
            Self::ConsciousSkip => "conscious-skip",
        }
    }
}

impl fmt::Display for HabitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One day of tracking data, keyed by calendar date.
///
/// Invariant: at most one entry per date. Entries are upserted — the first
/// mutation for a date creates the record, later mutations merge into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Habit id → recorded state.
    #[serde(default)]
    pub states: FxHashMap<String, HabitState>,
    /// Mood 1–5, if the user logged it.
    pub mood: Option<u8>,
    /// Energy 1–5, if the user logged it.
    pub energy: Option<u8>,
    pub note: Option<String>,
}

impl DayEntry {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            states: FxHashMap::default(),
            mood: None,
            energy: None,
            note: None,
        }
    }

    /// Recorded state for a habit, if any.
    pub fn state(&self, habit_id: &str) -> Option<HabitState> {
        self.states.get(habit_id).copied()
    }

    /// True when the habit was checked in as done on this day.
    pub fn is_done(&self, habit_id: &str) -> bool {
        self.state(habit_id) == Some(HabitState::Done)
    }

    /// Merge a later partial update into this entry.
    ///
    /// Habit states merge key-wise (incoming wins per key); mood, energy and
    /// note are replaced only when the incoming entry carries a value.
    pub fn merge(&mut self, incoming: DayEntry) {
        for (habit_id, state) in incoming.states {
            self.states.insert(habit_id, state);
        }
        if incoming.mood.is_some() {
            self.mood = incoming.mood;
        }
        if incoming.energy.is_some() {
            self.energy = incoming.energy;
        }
        if incoming.note.is_some() {
            self.note = incoming.note;
        }
    }
}
