//! Observation selection: cooldowns, rate limits, weighting, interpolation.
//!
//! The selector returns at most one observation per call and prefers silence
//! over forced output: any unmet condition yields `None`, never an error.

pub mod affinity;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use tracing::debug;

use tend_core::types::pattern::data_keys;
use tend_core::types::{
    DetectedPattern, Habit, Language, Observation, ObservationCategory, ObservationState,
    PatternType, PersonalityProfile, ShownObservation, SHOWN_HISTORY_CAP,
};

use crate::catalog::ObservationCatalog;

/// Hard cap on observations per ISO week (Monday start).
const MAX_PER_WEEK: usize = 3;
/// Flat bonus for any pattern more specific than `General`.
const SPECIFIC_BONUS: f64 = 0.2;
/// Bonus for a category that has never been shown.
const FRESH_CATEGORY_BONUS: f64 = 0.3;
/// Cap on the recency-based category bonus.
const CATEGORY_RECENCY_CAP: f64 = 0.2;
/// Days over which the category recency bonus ramps up.
const CATEGORY_RECENCY_RAMP_DAYS: f64 = 30.0;

/// The observation chosen for display, with resolved text.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedObservation {
    pub observation_id: String,
    pub category: ObservationCategory,
    /// Template text with habit placeholders substituted.
    pub text: String,
    /// Habit ids the observation refers to, in placeholder order.
    pub habit_ids: Vec<String>,
    /// Resolved display names, parallel to `habit_ids`.
    pub habit_names: Vec<String>,
}

struct Candidate<'a> {
    observation: &'a Observation,
    pattern: &'a DetectedPattern,
    weight: f64,
}

/// Selects which observation, if any, to surface.
pub struct ObservationSelector {
    catalog: ObservationCatalog,
}

impl ObservationSelector {
    pub fn new(catalog: ObservationCatalog) -> Self {
        Self { catalog }
    }

    /// Selector over the built-in catalog.
    pub fn with_defaults() -> Self {
        Self::new(ObservationCatalog::builtin())
    }

    /// Pick at most one observation for the detected patterns.
    ///
    /// `now` anchors the rate limits and cooldown math. The personality
    /// profile, when present, only re-weights candidates.
    pub fn select(
        &self,
        patterns: &[DetectedPattern],
        state: &ObservationState,
        habits: &[Habit],
        personality: Option<&PersonalityProfile>,
        language: Language,
        now: DateTime<Utc>,
    ) -> Option<SelectedObservation> {
        let today = now.date_naive();

        // Rate limits come before any candidate work.
        if let Some(last) = state.last_observation_date {
            if (today - last).num_days() < 1 {
                return None;
            }
        }
        if shown_in_week(state, today) >= MAX_PER_WEEK {
            return None;
        }

        let mut candidates: Vec<Candidate<'_>> = Vec::new();
        for pattern in patterns {
            for observation in self.catalog.for_pattern(pattern.pattern_type) {
                if !self.eligible(observation, pattern, state, now) {
                    continue;
                }
                let weight = self.weight(observation, pattern, state, personality, now);
                candidates.push(Candidate {
                    observation,
                    pattern,
                    weight,
                });
            }
        }

        if candidates.is_empty() {
            return None;
        }
        candidates.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        let top = &candidates[0];

        debug!(
            observation = top.observation.id,
            pattern = %top.pattern.pattern_type,
            weight = top.weight,
            "observation selected"
        );

        Some(resolve(top.observation, top.pattern, habits, language))
    }

    fn eligible(
        &self,
        observation: &Observation,
        pattern: &DetectedPattern,
        state: &ObservationState,
        now: DateTime<Utc>,
    ) -> bool {
        if let Some(prior) = state.last_shown(observation.id) {
            let age_days = (now - prior.shown_at).num_days();
            if age_days < i64::from(observation.cooldown_days) {
                return false;
            }
        }
        let conditions = &observation.conditions;
        if conditions.requires_habit && pattern.habit_id.is_none() {
            return false;
        }
        if conditions.requires_multi_habit && pattern.habit_ids.len() < 2 {
            return false;
        }
        if let Some(min_days) = conditions.min_data_days {
            if pattern.data_or(data_keys::DAYS_OF_DATA, 0.0) < f64::from(min_days) {
                return false;
            }
        }
        true
    }

    fn weight(
        &self,
        observation: &Observation,
        pattern: &DetectedPattern,
        state: &ObservationState,
        personality: Option<&PersonalityProfile>,
        now: DateTime<Utc>,
    ) -> f64 {
        let mut weight = pattern.confidence;

        // Specific beats generic.
        if pattern.pattern_type != PatternType::General {
            weight += SPECIFIC_BONUS;
        }

        weight += self.category_freshness(observation.category, state, now);

        if let Some(profile) = personality {
            weight += affinity::category_boost(profile, observation.category);
        }

        weight
    }

    /// Freshness bonus for the candidate's category: full bonus when the
    /// category has never been shown, otherwise a capped recency ramp.
    fn category_freshness(
        &self,
        category: ObservationCategory,
        state: &ObservationState,
        now: DateTime<Utc>,
    ) -> f64 {
        let last_of_category = state
            .shown
            .iter()
            .find(|shown| self.catalog.category_of(&shown.observation_id) == Some(category));

        match last_of_category {
            None => FRESH_CATEGORY_BONUS,
            Some(shown) => {
                let days_since = (now - shown.shown_at).num_days().max(0) as f64;
                (days_since / CATEGORY_RECENCY_RAMP_DAYS).min(CATEGORY_RECENCY_CAP)
            }
        }
    }
}

impl Default for ObservationSelector {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Record that an observation was surfaced. This is the only mutation path
/// for [`ObservationState`]: prepend, truncate to the history cap, refresh
/// the weekly projection, and stamp today.
pub fn record_shown(
    state: &mut ObservationState,
    observation_id: &str,
    habit_id: Option<&str>,
    now: DateTime<Utc>,
) {
    state.shown.insert(
        0,
        ShownObservation {
            observation_id: observation_id.to_string(),
            shown_at: now,
            habit_id: habit_id.map(str::to_string),
        },
    );
    state.shown.truncate(SHOWN_HISTORY_CAP);
    state.last_observation_date = Some(now.date_naive());
    state.observations_this_week = shown_in_week(state, now.date_naive()) as u32;
}

/// Count shown records falling in the ISO week (Monday start) of `today`.
fn shown_in_week(state: &ObservationState, today: NaiveDate) -> usize {
    let week = today.iso_week();
    state
        .shown
        .iter()
        .filter(|shown| {
            let shown_week = shown.shown_at.date_naive().iso_week();
            shown_week.year() == week.year() && shown_week.week() == week.week()
        })
        .count()
}

/// Substitute habit placeholders into the language-resolved template.
///
/// A failed habit lookup degrades to an empty name rather than failing the
/// selection.
fn resolve(
    observation: &Observation,
    pattern: &DetectedPattern,
    habits: &[Habit],
    language: Language,
) -> SelectedObservation {
    let template = observation.text.for_language(language);

    let display_name = |habit_id: &str| -> String {
        habits
            .iter()
            .find(|h| h.id == habit_id)
            .map(Habit::display_name)
            .unwrap_or_default()
    };

    let (text, habit_ids, habit_names) = if pattern.habit_ids.len() >= 2 {
        let name_a = display_name(&pattern.habit_ids[0]);
        let name_b = display_name(&pattern.habit_ids[1]);
        let text = template
            .replace("{habitA}", &name_a)
            .replace("{habitB}", &name_b);
        (
            text,
            pattern.habit_ids.iter().take(2).cloned().collect(),
            vec![name_a, name_b],
        )
    } else if let Some(habit_id) = &pattern.habit_id {
        let name = display_name(habit_id);
        (
            template.replace("{habit}", &name),
            vec![habit_id.clone()],
            vec![name],
        )
    } else {
        (template.to_string(), Vec::new(), Vec::new())
    };

    SelectedObservation {
        observation_id: observation.id.to_string(),
        category: observation.category,
        text: text.trim().to_string(),
        habit_ids,
        habit_names,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    use tend_core::types::{Motivation, Pace, Recovery};

    fn now() -> DateTime<Utc> {
        // A Friday; its ISO week starts Monday 2025-03-10.
        "2025-03-14T12:00:00Z".parse().unwrap()
    }

    fn habit(id: &str, name: &str) -> Habit {
        Habit::new(id, name)
    }

    fn soft_return(habit_id: &str) -> DetectedPattern {
        DetectedPattern::for_habit(PatternType::SoftReturn, habit_id, 0.8)
    }

    fn select_default(
        patterns: &[DetectedPattern],
        state: &ObservationState,
        habits: &[Habit],
    ) -> Option<SelectedObservation> {
        ObservationSelector::with_defaults().select(
            patterns,
            state,
            habits,
            None,
            Language::En,
            now(),
        )
    }

    #[test]
    fn test_selects_and_interpolates_single_habit() {
        let habits = vec![habit("h1", "Meditation")];
        let selected = select_default(&[soft_return("h1")], &ObservationState::default(), &habits)
            .expect("candidate available");
        assert!(selected.text.contains("Meditation"));
        assert!(!selected.text.contains("{habit}"));
        assert_eq!(selected.habit_ids, vec!["h1".to_string()]);
    }

    #[test]
    fn test_missing_habit_degrades_to_no_name() {
        let selected = select_default(&[soft_return("gone")], &ObservationState::default(), &[])
            .expect("selection should not fail on missing habit");
        assert!(!selected.text.contains("{habit}"));
        assert_eq!(selected.habit_names, vec![String::new()]);
    }

    #[test]
    fn test_pair_interpolation() {
        let habits = vec![habit("a", "Coffee"), habit("b", "Journal")];
        let pattern = DetectedPattern::for_pair(PatternType::HabitsTogether, "a", "b", 0.9);
        let selected =
            select_default(&[pattern], &ObservationState::default(), &habits).unwrap();
        assert!(selected.text.contains("Coffee"));
        assert!(selected.text.contains("Journal"));
        assert_eq!(selected.habit_names.len(), 2);
    }

    #[test]
    fn test_daily_cap_blocks_same_day() {
        let state = ObservationState {
            last_observation_date: Some(now().date_naive()),
            ..Default::default()
        };
        let habits = vec![habit("h1", "Meditation")];
        assert!(select_default(&[soft_return("h1")], &state, &habits).is_none());
    }

    #[test]
    fn test_daily_cap_allows_yesterday() {
        let state = ObservationState {
            last_observation_date: Some(now().date_naive() - Duration::days(1)),
            ..Default::default()
        };
        let habits = vec![habit("h1", "Meditation")];
        assert!(select_default(&[soft_return("h1")], &state, &habits).is_some());
    }

    #[test]
    fn test_weekly_cap_blocks_fourth() {
        let mut state = ObservationState::default();
        // Three observations earlier in the same ISO week (Mon–Wed), last one
        // two days ago so the daily cap does not interfere.
        for offset in [2i64, 3, 4] {
            state.shown.push(ShownObservation {
                observation_id: format!("obs-{offset}"),
                shown_at: now() - Duration::days(offset),
                habit_id: None,
            });
        }
        state.last_observation_date = Some(now().date_naive() - Duration::days(2));

        let habits = vec![habit("h1", "Meditation")];
        assert!(select_default(&[soft_return("h1")], &state, &habits).is_none());
    }

    #[test]
    fn test_prior_week_does_not_count() {
        let mut state = ObservationState::default();
        // Sunday 2025-03-09 and earlier: previous ISO week.
        for offset in [5i64, 6, 7] {
            state.shown.push(ShownObservation {
                observation_id: format!("obs-{offset}"),
                shown_at: now() - Duration::days(offset),
                habit_id: None,
            });
        }
        let habits = vec![habit("h1", "Meditation")];
        assert!(select_default(&[soft_return("h1")], &state, &habits).is_some());
    }

    #[test]
    fn test_cooldown_excludes_recently_shown() {
        let habits = vec![habit("h1", "Meditation")];
        let patterns = [soft_return("h1")];

        let mut state = ObservationState::default();
        let first = select_default(&patterns, &state, &habits).unwrap();
        record_shown(&mut state, &first.observation_id, Some("h1"), now());

        // Next day: same pattern, the just-shown id must not repeat.
        let selector = ObservationSelector::with_defaults();
        let next_day = now() + Duration::days(1);
        if let Some(second) = selector.select(
            &patterns,
            &state,
            &habits,
            None,
            Language::En,
            next_day,
        ) {
            assert_ne!(second.observation_id, first.observation_id);
        }
    }

    #[test]
    fn test_cooldown_expires() {
        let habits = vec![habit("h1", "Meditation")];
        let patterns = [soft_return("h1")];
        let selector = ObservationSelector::with_defaults();

        let mut state = ObservationState::default();
        let first = select_default(&patterns, &state, &habits).unwrap();
        let cooldown = selector
            .catalog
            .get(&first.observation_id)
            .unwrap()
            .cooldown_days;
        record_shown(&mut state, &first.observation_id, Some("h1"), now());

        // One day short of the cooldown: excluded.
        let almost = now() + Duration::days(i64::from(cooldown) - 1);
        if let Some(again) = selector.select(&patterns, &state, &habits, None, Language::En, almost)
        {
            assert_ne!(again.observation_id, first.observation_id);
        }

        // At the cooldown boundary the id is eligible again. Freshness for
        // its category is now low, so pick via an empty competing set.
        let past = now() + Duration::days(i64::from(cooldown) + 40);
        let again = selector
            .select(&patterns, &state, &habits, None, Language::En, past)
            .unwrap();
        assert!(!again.observation_id.is_empty());
    }

    #[test]
    fn test_min_data_days_gate() {
        let habits = vec![habit("h1", "Meditation")];
        // A general pattern without days_of_data never clears min_data_days.
        let bare = DetectedPattern::general(PatternType::General, 0.4);
        assert!(select_default(&[bare], &ObservationState::default(), &habits).is_none());

        let with_data = DetectedPattern::general(PatternType::General, 0.4)
            .with_data(data_keys::DAYS_OF_DATA, 12.0);
        assert!(select_default(&[with_data], &ObservationState::default(), &habits).is_some());
    }

    #[test]
    fn test_specific_beats_general() {
        let habits = vec![habit("h1", "Meditation")];
        let general = DetectedPattern::general(PatternType::General, 0.4)
            .with_data(data_keys::DAYS_OF_DATA, 12.0);
        // Lower raw confidence, but the specific bonus lifts it above.
        let specific = soft_return("h1");
        let selected =
            select_default(&[general, specific], &ObservationState::default(), &habits).unwrap();
        assert_ne!(selected.category, ObservationCategory::Meta);
    }

    #[test]
    fn test_personality_reweights_not_filters() {
        let habits = vec![habit("h1", "Meditation"), habit("h2", "Reading")];
        // Two candidates with identical confidence; the profile's outward
        // boost favors the change-over-time category.
        let pause = DetectedPattern::for_habit(PatternType::NaturalBreak, "h1", 0.6);
        let change = DetectedPattern::for_habit(PatternType::SlightIncrease, "h2", 0.6);

        let profile = PersonalityProfile {
            motivation: Motivation::Outer,
            ..Default::default()
        };
        let selected = ObservationSelector::with_defaults()
            .select(
                &[pause, change],
                &ObservationState::default(),
                &habits,
                Some(&profile),
                Language::En,
                now(),
            )
            .unwrap();
        assert_eq!(selected.category, ObservationCategory::ChangeOverTime);
    }

    #[test]
    fn test_no_patterns_is_silence() {
        assert!(select_default(&[], &ObservationState::default(), &[]).is_none());
    }

    #[test]
    fn test_record_shown_caps_history() {
        let mut state = ObservationState::default();
        for i in 0..120 {
            record_shown(&mut state, &format!("obs-{i}"), None, now());
        }
        assert_eq!(state.shown.len(), SHOWN_HISTORY_CAP);
        // Newest first.
        assert_eq!(state.shown[0].observation_id, "obs-119");
        assert_eq!(state.last_observation_date, Some(now().date_naive()));
    }

    #[test]
    fn test_german_templates() {
        let habits = vec![habit("h1", "Meditation")];
        let selected = ObservationSelector::with_defaults()
            .select(
                &[soft_return("h1")],
                &ObservationState::default(),
                &habits,
                None,
                Language::De,
                now(),
            )
            .unwrap();
        assert!(selected.text.contains("Meditation"));
        assert!(!selected.text.contains("{habit}"));
    }
}
