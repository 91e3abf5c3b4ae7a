//! Observation catalog entries and the persisted shown-observation state.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::pattern::PatternType;

/// Maximum shown-observation records retained in state.
pub const SHOWN_HISTORY_CAP: usize = 100;

/// Languages the observation catalog ships templates for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

/// Closed enumeration of observation categories.
///
/// Categories group observation texts by the kind of thing they notice; the
/// selector uses them for freshness boosts and personality affinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObservationCategory {
    RhythmTime,
    WeekdayCycle,
    QuietRegularity,
    PauseBreak,
    ChangeOverTime,
    Relationship,
    ConsciousPause,
    Ease,
    NewBeginning,
    SelfKindness,
    Noticing,
    OpenEnd,
    Meta,
}

impl ObservationCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RhythmTime => "rhythm-time",
            Self::WeekdayCycle => "weekday-cycle",
            Self::QuietRegularity => "quiet-regularity",
            Self::PauseBreak => "pause-break",
            Self::ChangeOverTime => "change-over-time",
            Self::Relationship => "relationship",
            Self::ConsciousPause => "conscious-pause",
            Self::Ease => "ease",
            Self::NewBeginning => "new-beginning",
            Self::SelfKindness => "self-kindness",
            Self::Noticing => "noticing",
            Self::OpenEnd => "open-end",
            Self::Meta => "meta",
        }
    }
}

impl fmt::Display for ObservationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Conditions under which a catalog observation is eligible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationConditions {
    pub pattern_type: PatternType,
    /// Minimum `days_of_data` the triggering pattern must carry.
    pub min_data_days: Option<u32>,
    /// Requires the pattern to reference a single habit.
    pub requires_habit: bool,
    /// Requires the pattern to reference at least two habits.
    pub requires_multi_habit: bool,
}

impl ObservationConditions {
    pub fn for_pattern(pattern_type: PatternType) -> Self {
        Self {
            pattern_type,
            min_data_days: None,
            requires_habit: false,
            requires_multi_habit: false,
        }
    }
}

/// Localized template text for one observation.
///
/// Templates use `{habit}` for the single implicit habit name and
/// `{habitA}` / `{habitB}` for pair observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationText {
    pub en: &'static str,
    pub de: &'static str,
}

impl ObservationText {
    pub fn for_language(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::De => self.de,
        }
    }
}

/// One static catalog entry. Catalog data is never mutated at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub id: &'static str,
    pub category: ObservationCategory,
    pub conditions: ObservationConditions,
    /// Minimum days before this observation id may be shown again.
    pub cooldown_days: u32,
    pub text: ObservationText,
}

/// A record of one observation having been surfaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShownObservation {
    pub observation_id: String,
    pub shown_at: DateTime<Utc>,
    pub habit_id: Option<String>,
}

/// Persisted, user-scoped selection state.
///
/// `shown` is ordered newest-first and capped at [`SHOWN_HISTORY_CAP`].
/// `observations_this_week` is a cached projection of `shown`, recomputed on
/// every record; the weekly rate limit counts from the list itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ObservationState {
    #[serde(default)]
    pub shown: Vec<ShownObservation>,
    pub last_observation_date: Option<NaiveDate>,
    #[serde(default)]
    pub observations_this_week: u32,
}

impl ObservationState {
    /// Most recent shown record for the given observation id.
    pub fn last_shown(&self, observation_id: &str) -> Option<&ShownObservation> {
        self.shown.iter().find(|s| s.observation_id == observation_id)
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{ObservationText, SHOWN_HISTORY_CAP};

    use super::*;

    #[test]
    fn test_text_for_language() {
        let text = ObservationText { en: "en text", de: "de text" };
        assert_eq!(text.for_language(Language::En), "en text");
        assert_eq!(text.for_language(Language::De), "de text");
        assert!(SHOWN_HISTORY_CAP > 0);
    }

    #[test]
    fn test_last_shown_finds_newest_first() {
        let state = ObservationState {
            shown: vec![
                ShownObservation {
                    observation_id: "obs-a".to_string(),
                    shown_at: "2025-03-10T08:00:00Z".parse().unwrap(),
                    habit_id: None,
                },
                ShownObservation {
                    observation_id: "obs-a".to_string(),
                    shown_at: "2025-02-01T08:00:00Z".parse().unwrap(),
                    habit_id: None,
                },
            ],
            ..Default::default()
        };
        let hit = state.last_shown("obs-a").unwrap();
        assert_eq!(hit.shown_at.to_rfc3339(), "2025-03-10T08:00:00+00:00");
        assert!(state.last_shown("obs-x").is_none());
    }
}
