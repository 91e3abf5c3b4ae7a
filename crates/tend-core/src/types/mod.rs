//! Data model for the Tend observation engine.

pub mod collections;
pub mod entry;
pub mod habit;
pub mod insight;
pub mod observation;
pub mod pattern;
pub mod personality;

pub use entry::{DayEntry, HabitState};
pub use habit::{Habit, ReminderConfig, SoftFrequency, TimeAnchor};
pub use insight::{Insight, InsightFrequency, InsightKind, InsightMessage};
pub use observation::{
    Language, Observation, ObservationCategory, ObservationConditions, ObservationState,
    ObservationText, ShownObservation, SHOWN_HISTORY_CAP,
};
pub use pattern::{DetectedPattern, PatternType};
pub use personality::{
    Approach, Energy, Focus, Motivation, Pace, PersonalityProfile, Recovery, Rhythm,
};
