//! Correlation insight candidates: energy, mood, and habit pairings.

use tend_core::types::collections::FxHashMap;
use tend_core::types::{DayEntry, InsightKind, InsightMessage};

use chrono::NaiveDate;

use super::context::InsightContext;
use super::InsightCandidate;

/// Minimum matching days before an energy/mood split is worth mentioning.
const MIN_MATCHING_DAYS: usize = 2;
/// Minimum same-day joint completions for a habit pairing.
const MIN_JOINT_DAYS: usize = 3;

pub(super) fn collect(ctx: &InsightContext<'_>) -> Vec<InsightCandidate> {
    let mut candidates = Vec::new();
    candidates.extend(high_energy(ctx));
    candidates.extend(low_energy(ctx));
    candidates.extend(good_mood_habit(ctx));
    candidates.extend(habit_pairs(ctx));
    candidates
}

fn done_count(entry: &DayEntry) -> usize {
    entry
        .states
        .values()
        .filter(|state| **state == tend_core::types::HabitState::Done)
        .count()
}

/// High-energy days that carried noticeably more completions.
fn high_energy(ctx: &InsightContext<'_>) -> Option<InsightCandidate> {
    let days: Vec<&(&DayEntry, NaiveDate)> = ctx
        .fortnight
        .iter()
        .filter(|(entry, _)| entry.energy.is_some_and(|e| e >= 4))
        .collect();
    if days.len() < MIN_MATCHING_DAYS {
        return None;
    }
    let average = days.iter().map(|(entry, _)| done_count(entry)).sum::<usize>() as f64
        / days.len() as f64;
    if average < 2.0 {
        return None;
    }
    Some(InsightCandidate {
        kind: InsightKind::Correlation,
        message: InsightMessage::keyed_with(
            "insight.correlation.high_energy",
            &[("average", &format!("{average:.1}"))],
        ),
        weight: 8.0,
    })
}

/// Low-energy days exist; mentioned without any further condition.
fn low_energy(ctx: &InsightContext<'_>) -> Option<InsightCandidate> {
    let count = ctx
        .fortnight
        .iter()
        .filter(|(entry, _)| entry.energy.is_some_and(|e| e <= 2))
        .count();
    if count < MIN_MATCHING_DAYS {
        return None;
    }
    Some(InsightCandidate {
        kind: InsightKind::Correlation,
        message: InsightMessage::keyed_with(
            "insight.correlation.low_energy",
            &[("count", &count.to_string())],
        ),
        weight: 5.0,
    })
}

/// The habit most often completed on good-mood days.
fn good_mood_habit(ctx: &InsightContext<'_>) -> Option<InsightCandidate> {
    let good_days: Vec<&(&DayEntry, NaiveDate)> = ctx
        .fortnight
        .iter()
        .filter(|(entry, _)| entry.mood.is_some_and(|m| m >= 4))
        .collect();
    if good_days.len() < MIN_MATCHING_DAYS {
        return None;
    }

    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for habit in &ctx.habits {
        let count = good_days
            .iter()
            .filter(|(entry, _)| entry.is_done(&habit.id))
            .count();
        if count > 0 {
            counts.insert(habit.id.as_str(), count);
        }
    }

    let (habit_id, count) = counts.into_iter().max_by_key(|(_, count)| *count)?;
    if count < 2 {
        return None;
    }
    let habit = ctx.habits.iter().find(|h| h.id == habit_id)?;
    Some(InsightCandidate {
        kind: InsightKind::Correlation,
        message: InsightMessage::keyed_with(
            "insight.correlation.good_mood_habit",
            &[("habit", &habit.display_name())],
        ),
        weight: 9.0,
    })
}

/// Ordered habit pairs that complete on the same days.
fn habit_pairs(ctx: &InsightContext<'_>) -> Vec<InsightCandidate> {
    let mut candidates = Vec::new();
    for a in &ctx.habits {
        for b in &ctx.habits {
            if a.id == b.id {
                continue;
            }
            let joint = ctx
                .fortnight
                .iter()
                .filter(|(entry, _)| entry.is_done(&a.id) && entry.is_done(&b.id))
                .count();
            if joint < MIN_JOINT_DAYS {
                continue;
            }
            candidates.push(InsightCandidate {
                kind: InsightKind::Correlation,
                message: InsightMessage::keyed_with(
                    "insight.correlation.habit_pair",
                    &[
                        ("habitA", &a.display_name()),
                        ("habitB", &b.display_name()),
                    ],
                ),
                weight: 5.0 + joint as f64,
            });
        }
    }
    candidates
}
