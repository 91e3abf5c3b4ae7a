//! Prompt insight candidates: gentle reflection starters.

use tend_core::traits::IndexPicker;
use tend_core::types::{Energy, InsightKind, InsightMessage, PersonalityProfile, Rhythm, TimeAnchor};

use super::context::InsightContext;
use super::InsightCandidate;

/// Generic prompts used only when nothing specific fired.
const GENERIC_PROMPT_KEYS: &[&str] = &[
    "insight.prompt.generic_notice",
    "insight.prompt.generic_smallest",
    "insight.prompt.generic_pause",
    "insight.prompt.generic_tomorrow",
];

pub(super) fn collect(
    ctx: &InsightContext<'_>,
    personality: Option<&PersonalityProfile>,
    picker: &mut dyn IndexPicker,
) -> Vec<InsightCandidate> {
    let mut candidates = Vec::new();
    candidates.extend(most_done(ctx));
    candidates.extend(least_done(ctx));
    candidates.extend(personality_aligned(ctx, personality));

    if candidates.is_empty() {
        candidates.push(generic_fallback(picker));
    }
    candidates
}

/// Habit with the most weekly done marks, given at least a few.
fn most_done(ctx: &InsightContext<'_>) -> Option<InsightCandidate> {
    let (habit, count) = ctx
        .habits
        .iter()
        .map(|habit| (habit, ctx.week_done(&habit.id)))
        .max_by_key(|(_, count)| *count)?;
    if count < 3 {
        return None;
    }
    Some(InsightCandidate {
        kind: InsightKind::Prompt,
        message: InsightMessage::keyed_with(
            "insight.prompt.most_done",
            &[("habit", &habit.display_name())],
        ),
        weight: 7.0,
    })
}

/// Habit that appeared only once or twice this week.
fn least_done(ctx: &InsightContext<'_>) -> Option<InsightCandidate> {
    let habit = ctx
        .habits
        .iter()
        .filter(|habit| (1..=2).contains(&ctx.week_done(&habit.id)))
        .min_by_key(|habit| ctx.week_done(&habit.id))?;
    Some(InsightCandidate {
        kind: InsightKind::Prompt,
        message: InsightMessage::keyed_with(
            "insight.prompt.least_done",
            &[("habit", &habit.display_name())],
        ),
        weight: 5.0,
    })
}

/// Prompts aligned with the personality profile.
fn personality_aligned(
    ctx: &InsightContext<'_>,
    personality: Option<&PersonalityProfile>,
) -> Vec<InsightCandidate> {
    let Some(profile) = personality else {
        return Vec::new();
    };
    let mut candidates = Vec::new();

    if profile.rhythm == Rhythm::Morning {
        let top = ctx
            .habits
            .iter()
            .max_by_key(|habit| ctx.week_done(&habit.id));
        if let Some(habit) = top {
            if habit.time_anchor == TimeAnchor::Morning && ctx.week_done(&habit.id) > 0 {
                candidates.push(InsightCandidate {
                    kind: InsightKind::Prompt,
                    message: InsightMessage::keyed_with(
                        "insight.prompt.morning_alignment",
                        &[("habit", &habit.display_name())],
                    ),
                    weight: 6.0,
                });
            }
        }
    }

    if profile.energy == Energy::Waves {
        candidates.push(InsightCandidate {
            kind: InsightKind::Prompt,
            message: InsightMessage::keyed("insight.prompt.waves_energy"),
            weight: 4.0,
        });
    }

    candidates
}

fn generic_fallback(picker: &mut dyn IndexPicker) -> InsightCandidate {
    let index = picker.pick(GENERIC_PROMPT_KEYS.len());
    InsightCandidate {
        kind: InsightKind::Prompt,
        message: InsightMessage::keyed(GENERIC_PROMPT_KEYS[index]),
        weight: 3.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    use tend_core::types::{DayEntry, Habit, HabitState};

    fn today() -> NaiveDate {
        NaiveDate::parse_from_str("2025-03-14", "%Y-%m-%d").unwrap()
    }

    fn done_entries(habit_id: &str, days: usize) -> Vec<DayEntry> {
        (0..days)
            .map(|offset| {
                let date = (today() - Duration::days(offset as i64))
                    .format("%Y-%m-%d")
                    .to_string();
                let mut entry = DayEntry::new(&date);
                entry.states.insert(habit_id.to_string(), HabitState::Done);
                entry
            })
            .collect()
    }

    #[test]
    fn test_most_done_needs_three_marks() {
        let habits = vec![Habit::new("h1", "Meditation")];

        let entries = done_entries("h1", 2);
        let ctx = InsightContext::build(&entries, &habits, today());
        assert!(most_done(&ctx).is_none());

        let entries = done_entries("h1", 3);
        let ctx = InsightContext::build(&entries, &habits, today());
        let candidate = most_done(&ctx).expect("three marks fire");
        assert_eq!(candidate.weight, 7.0);
    }

    #[test]
    fn test_most_done_picks_the_busier_habit() {
        let habits = vec![Habit::new("h1", "Meditation"), Habit::new("h2", "Journal")];
        let mut entries = done_entries("h1", 4);
        for entry in entries.iter_mut().take(3) {
            entry.states.insert("h2".to_string(), HabitState::Done);
        }
        let ctx = InsightContext::build(&entries, &habits, today());
        let candidate = most_done(&ctx).unwrap();
        match candidate.message {
            InsightMessage::Keyed { params, .. } => {
                assert_eq!(params.get("habit").map(String::as_str), Some("Meditation"));
            }
            InsightMessage::Literal { .. } => panic!("keyed message expected"),
        }
    }
}
