//! Pattern insight candidates: timing leaders, week-over-week movement,
//! skips, and steady days.

use tend_core::types::{HabitState, InsightKind, InsightMessage, TimeAnchor};

use crate::timeline;

use super::context::InsightContext;
use super::InsightCandidate;

/// Minimum (entry, habit) samples before an anchor rate means anything.
const MIN_ANCHOR_SAMPLES: usize = 3;
/// Completion rate an anchor must clear to lead.
const ANCHOR_LEADER_RATE: f64 = 0.6;

pub(super) fn collect(ctx: &InsightContext<'_>) -> Vec<InsightCandidate> {
    let mut candidates = Vec::new();
    candidates.extend(anchor_leader(ctx));
    candidates.extend(week_over_week(ctx));
    candidates.extend(conscious_skips(ctx));
    candidates.extend(consistent_days(ctx));
    candidates
}

/// The time anchor whose habits complete most reliably. A sample is one
/// (entry, anchored-habit) pair carrying any recorded state in the window.
fn anchor_leader(ctx: &InsightContext<'_>) -> Option<InsightCandidate> {
    let mut leader: Option<(TimeAnchor, f64)> = None;

    for anchor in [TimeAnchor::Morning, TimeAnchor::Midday, TimeAnchor::Evening] {
        let mut samples = 0usize;
        let mut done = 0usize;
        for habit in ctx.habits.iter().filter(|h| h.time_anchor == anchor) {
            for (entry, _) in &ctx.fortnight {
                match entry.state(&habit.id) {
                    Some(HabitState::Done) => {
                        samples += 1;
                        done += 1;
                    }
                    Some(_) => samples += 1,
                    None => {}
                }
            }
        }
        if samples < MIN_ANCHOR_SAMPLES {
            continue;
        }
        let rate = done as f64 / samples as f64;
        if rate <= ANCHOR_LEADER_RATE {
            continue;
        }
        if leader.map_or(true, |(_, best)| rate > best) {
            leader = Some((anchor, rate));
        }
    }

    let (anchor, rate) = leader?;
    Some(InsightCandidate {
        kind: InsightKind::Pattern,
        message: InsightMessage::keyed_with(
            "insight.pattern.anchor_leader",
            &[("anchor", anchor.name())],
        ),
        weight: rate * 10.0,
    })
}

/// More entries this week than last, with enough data to compare.
fn week_over_week(ctx: &InsightContext<'_>) -> Option<InsightCandidate> {
    if ctx.fortnight.len() < 10 {
        return None;
    }
    let this_week = ctx.week.len();
    let last_week = ctx.fortnight.len() - this_week;
    if last_week == 0 || this_week <= last_week {
        return None;
    }
    Some(InsightCandidate {
        kind: InsightKind::Pattern,
        message: InsightMessage::keyed_with(
            "insight.pattern.week_over_week",
            &[
                ("thisWeek", &this_week.to_string()),
                ("lastWeek", &last_week.to_string()),
            ],
        ),
        weight: 6.0,
    })
}

/// Two or more conscious skips across all habits this week.
fn conscious_skips(ctx: &InsightContext<'_>) -> Option<InsightCandidate> {
    let total: usize = ctx
        .habits
        .iter()
        .map(|habit| timeline::count_state(&ctx.week, &habit.id, HabitState::ConsciousSkip))
        .sum();
    if total < 2 {
        return None;
    }
    Some(InsightCandidate {
        kind: InsightKind::Pattern,
        message: InsightMessage::keyed_with(
            "insight.pattern.conscious_skips",
            &[("count", &total.to_string())],
        ),
        weight: 7.0,
    })
}

/// Five or more recorded days this week.
fn consistent_days(ctx: &InsightContext<'_>) -> Option<InsightCandidate> {
    if ctx.week.len() < 5 {
        return None;
    }
    Some(InsightCandidate {
        kind: InsightKind::Pattern,
        message: InsightMessage::keyed_with(
            "insight.pattern.consistent_days",
            &[("count", &ctx.week.len().to_string())],
        ),
        weight: 4.0,
    })
}
