//! Detected behavioral patterns: ephemeral output of the detection pass.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::collections::FxHashMap;

/// Closed enumeration of everything the detector can notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternType {
    /// Checked in again after a pause of several days.
    SoftReturn,
    /// Several restarts after multi-day gaps within the last month.
    MultipleRestart,
    /// Regular check-ins for a habit with a time anchor.
    SameTime,
    /// Regular check-ins for a habit without any time anchor.
    VariedTime,
    /// Clearly different weekday vs weekend rhythm.
    WeekdayWeekendDiff,
    /// A small, steady number of check-ins.
    QuietConsistency,
    /// Check-ins cluster into bursts separated by quiet days.
    DensePhases,
    /// Deliberate skips, for one habit or across all of them.
    ConsciousSkip,
    /// The most recent check-in is a few days old.
    NaturalBreak,
    /// More check-ins than in the preceding window.
    SlightIncrease,
    /// Fewer check-ins than in the preceding window.
    SlightDecrease,
    /// Check-ins that seem to come easily, per habit or overall.
    EffortlessMoment,
    /// Two habits that tend to land on the same days.
    HabitsTogether,
    /// One anchored habit tends to precede another on the same day.
    HabitSequence,
    /// Enough data exists to say something, nothing more specific.
    General,
}

impl PatternType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SoftReturn => "soft-return",
            Self::MultipleRestart => "multiple-restart",
            Self::SameTime => "same-time",
            Self::VariedTime => "varied-time",
            Self::WeekdayWeekendDiff => "weekday-weekend-diff",
            Self::QuietConsistency => "quiet-consistency",
            Self::DensePhases => "dense-phases",
            Self::ConsciousSkip => "conscious-skip",
            Self::NaturalBreak => "natural-break",
            Self::SlightIncrease => "slight-increase",
            Self::SlightDecrease => "slight-decrease",
            Self::EffortlessMoment => "effortless-moment",
            Self::HabitsTogether => "habits-together",
            Self::HabitSequence => "habit-sequence",
            Self::General => "general",
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Auxiliary data keys carried on detected patterns.
pub mod data_keys {
    pub const GAP_DAYS: &str = "gap_days";
    pub const GAP_COUNT: &str = "gap_count";
    pub const SKIP_COUNT: &str = "skip_count";
    pub const RECENT_COUNT: &str = "recent_count";
    pub const OLDER_COUNT: &str = "older_count";
    pub const JOINT_COUNT: &str = "joint_count";
    pub const ENGAGED_DAYS: &str = "engaged_days";
    pub const DAYS_OF_DATA: &str = "days_of_data";
}

/// One detected pattern. Recomputed on every detection pass, never persisted.
///
/// Confidence values are normalized to [0, 1] by every detector so they are
/// comparable across pattern types and usable directly as selection weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedPattern {
    pub pattern_type: PatternType,
    /// The habit this pattern is about, for single-habit patterns.
    pub habit_id: Option<String>,
    /// Participating habits for pair patterns (len ≥ 2 when non-empty).
    #[serde(default)]
    pub habit_ids: SmallVec<[String; 2]>,
    pub confidence: f64,
    /// Pattern-specific numeric context (gap lengths, counts).
    #[serde(default)]
    pub data: FxHashMap<String, f64>,
}

impl DetectedPattern {
    /// A pattern not tied to any habit.
    pub fn general(pattern_type: PatternType, confidence: f64) -> Self {
        Self {
            pattern_type,
            habit_id: None,
            habit_ids: SmallVec::new(),
            confidence: confidence.clamp(0.0, 1.0),
            data: FxHashMap::default(),
        }
    }

    /// A pattern about a single habit.
    pub fn for_habit(pattern_type: PatternType, habit_id: &str, confidence: f64) -> Self {
        Self {
            pattern_type,
            habit_id: Some(habit_id.to_string()),
            habit_ids: SmallVec::new(),
            confidence: confidence.clamp(0.0, 1.0),
            data: FxHashMap::default(),
        }
    }

    /// A pattern about a pair of habits.
    pub fn for_pair(pattern_type: PatternType, a: &str, b: &str, confidence: f64) -> Self {
        let mut habit_ids = SmallVec::new();
        habit_ids.push(a.to_string());
        habit_ids.push(b.to_string());
        Self {
            pattern_type,
            habit_id: None,
            habit_ids,
            confidence: confidence.clamp(0.0, 1.0),
            data: FxHashMap::default(),
        }
    }

    /// Attach an auxiliary data value.
    pub fn with_data(mut self, key: &str, value: f64) -> Self {
        self.data.insert(key.to_string(), value);
        self
    }

    /// Auxiliary value, or the given default when absent.
    pub fn data_or(&self, key: &str, default: f64) -> f64 {
        self.data.get(key).copied().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_clamp_confidence() {
        assert_eq!(DetectedPattern::general(PatternType::General, 1.7).confidence, 1.0);
        assert_eq!(
            DetectedPattern::for_habit(PatternType::SoftReturn, "h1", -0.2).confidence,
            0.0
        );
    }

    #[test]
    fn test_pair_carries_both_ids() {
        let p = DetectedPattern::for_pair(PatternType::HabitsTogether, "a", "b", 0.6);
        assert_eq!(p.habit_ids.len(), 2);
        assert_eq!(p.habit_id, None);
    }

    #[test]
    fn test_data_or_default() {
        let p = DetectedPattern::general(PatternType::General, 0.4)
            .with_data(data_keys::DAYS_OF_DATA, 9.0);
        assert_eq!(p.data_or(data_keys::DAYS_OF_DATA, 0.0), 9.0);
        assert_eq!(p.data_or(data_keys::GAP_DAYS, 0.0), 0.0);
    }
}
