//! Per-habit detectors: each runs independently over one non-resting habit.

use chrono::Duration;

use tend_core::types::pattern::data_keys;
use tend_core::types::{DetectedPattern, Habit, HabitState, PatternType, TimeAnchor};

use crate::timeline;

use super::context::DetectionContext;

/// Gap (in days) at or above which a return counts as a soft return.
const SOFT_RETURN_MIN_GAP: i64 = 4;
/// Gap at or above which a pause counts toward multiple restarts.
const RESTART_MIN_GAP: i64 = 3;
/// Window for restart counting, independent of the lookback window.
const RESTART_WINDOW_DAYS: i64 = 30;

/// Run every per-habit detector for one habit.
pub fn detect(ctx: &DetectionContext<'_>, habit: &Habit) -> Vec<DetectedPattern> {
    let mut patterns = Vec::new();

    let all_done = timeline::done_dates(ctx.entries, &habit.id);
    let recent_done = ctx.recent_done(&habit.id);
    let recent_count = recent_done.len();
    let older_count = timeline::done_dates_in(&ctx.older, &habit.id).len();

    patterns.extend(soft_return(habit, &all_done));
    patterns.extend(multiple_restart(ctx, habit, &all_done));
    patterns.extend(timing(ctx, habit, recent_count));
    patterns.extend(weekday_weekend(habit, &recent_done));
    patterns.extend(quiet_consistency(habit, recent_count));
    patterns.extend(dense_phases(ctx, habit, &recent_done));
    patterns.extend(conscious_skip(ctx, habit));
    patterns.extend(natural_break(ctx, habit, &all_done));
    patterns.extend(trend(habit, recent_count, older_count));
    patterns.extend(effortless(habit, recent_count));

    patterns
}

/// The most recent check-in follows the previous one by a multi-day gap.
fn soft_return(habit: &Habit, all_done: &[chrono::NaiveDate]) -> Option<DetectedPattern> {
    if all_done.len() < 2 {
        return None;
    }
    let gap = (all_done[all_done.len() - 1] - all_done[all_done.len() - 2]).num_days();
    if gap < SOFT_RETURN_MIN_GAP {
        return None;
    }
    Some(
        DetectedPattern::for_habit(PatternType::SoftReturn, &habit.id, gap as f64 / 7.0)
            .with_data(data_keys::GAP_DAYS, gap as f64),
    )
}

/// Two or more multi-day gaps between check-ins within the last 30 days.
fn multiple_restart(
    ctx: &DetectionContext<'_>,
    habit: &Habit,
    all_done: &[chrono::NaiveDate],
) -> Option<DetectedPattern> {
    let window_start = ctx.today - Duration::days(RESTART_WINDOW_DAYS - 1);
    let in_window: Vec<chrono::NaiveDate> = all_done
        .iter()
        .copied()
        .filter(|date| *date >= window_start && *date <= ctx.today)
        .collect();

    let gap_count = timeline::gaps(&in_window)
        .iter()
        .filter(|gap| **gap >= RESTART_MIN_GAP)
        .count();
    if gap_count < 2 {
        return None;
    }
    Some(
        DetectedPattern::for_habit(
            PatternType::MultipleRestart,
            &habit.id,
            gap_count as f64 / 3.0,
        )
        .with_data(data_keys::GAP_COUNT, gap_count as f64),
    )
}

/// Same-time for anchored habits, varied-time for unanchored ones.
///
/// No literal timestamp is recorded per check-in, so anchor presence alone
/// counts as timing consistency; same-time confidence is the observed
/// check-in rate over the window.
fn timing(
    ctx: &DetectionContext<'_>,
    habit: &Habit,
    recent_count: usize,
) -> Option<DetectedPattern> {
    if recent_count < 3 {
        return None;
    }
    match habit.time_anchor {
        TimeAnchor::None => Some(DetectedPattern::for_habit(
            PatternType::VariedTime,
            &habit.id,
            0.7,
        )),
        _ => {
            let rate = recent_count as f64 / f64::from(ctx.lookback_days);
            Some(
                DetectedPattern::for_habit(PatternType::SameTime, &habit.id, rate)
                    .with_data(data_keys::RECENT_COUNT, recent_count as f64),
            )
        }
    }
}

/// Weekday vs weekend check-in rates diverge noticeably.
fn weekday_weekend(habit: &Habit, recent_done: &[chrono::NaiveDate]) -> Option<DetectedPattern> {
    if recent_done.len() < 4 {
        return None;
    }
    let (weekday, weekend) = timeline::weekday_split(recent_done);
    let weekday_rate = weekday as f64 / 5.0;
    let weekend_rate = weekend as f64 / 2.0;
    let diff = (weekday_rate - weekend_rate).abs();
    if diff <= 0.3 {
        return None;
    }
    Some(DetectedPattern::for_habit(
        PatternType::WeekdayWeekendDiff,
        &habit.id,
        diff,
    ))
}

/// A small, steady number of check-ins (2–4 in the window).
fn quiet_consistency(habit: &Habit, recent_count: usize) -> Option<DetectedPattern> {
    if !(2..=4).contains(&recent_count) {
        return None;
    }
    Some(
        DetectedPattern::for_habit(PatternType::QuietConsistency, &habit.id, 0.6)
            .with_data(data_keys::RECENT_COUNT, recent_count as f64),
    )
}

/// Check-ins cluster into a multi-day run with quiet days around it.
fn dense_phases(
    ctx: &DetectionContext<'_>,
    habit: &Habit,
    recent_done: &[chrono::NaiveDate],
) -> Option<DetectedPattern> {
    let quiet_days = ctx.lookback_days as usize - recent_done.len().min(ctx.lookback_days as usize);
    if timeline::longest_run(recent_done) < 2 || quiet_days < 3 {
        return None;
    }
    Some(DetectedPattern::for_habit(
        PatternType::DensePhases,
        &habit.id,
        0.7,
    ))
}

/// Two or more conscious skips for this habit in the window.
fn conscious_skip(ctx: &DetectionContext<'_>, habit: &Habit) -> Option<DetectedPattern> {
    let skips = timeline::count_state(&ctx.recent, &habit.id, HabitState::ConsciousSkip);
    if skips < 2 {
        return None;
    }
    Some(
        DetectedPattern::for_habit(PatternType::ConsciousSkip, &habit.id, skips as f64 / 3.0)
            .with_data(data_keys::SKIP_COUNT, skips as f64),
    )
}

/// The most recent check-in lies 3–7 days back.
fn natural_break(
    ctx: &DetectionContext<'_>,
    habit: &Habit,
    all_done: &[chrono::NaiveDate],
) -> Option<DetectedPattern> {
    let last = *all_done.last()?;
    let age = (ctx.today - last).num_days();
    if !(3..=7).contains(&age) {
        return None;
    }
    Some(
        DetectedPattern::for_habit(PatternType::NaturalBreak, &habit.id, 0.6)
            .with_data(data_keys::GAP_DAYS, age as f64),
    )
}

/// Window-over-window count comparison. Increase and decrease are mutually
/// exclusive; equal counts fire neither.
fn trend(habit: &Habit, recent_count: usize, older_count: usize) -> Option<DetectedPattern> {
    let (pattern_type, confidence) = if recent_count > older_count && older_count > 0 {
        (
            PatternType::SlightIncrease,
            (recent_count - older_count) as f64 / older_count as f64,
        )
    } else if recent_count < older_count && recent_count > 0 {
        (
            PatternType::SlightDecrease,
            (older_count - recent_count) as f64 / older_count as f64,
        )
    } else {
        return None;
    };

    Some(
        DetectedPattern::for_habit(pattern_type, &habit.id, confidence)
            .with_data(data_keys::RECENT_COUNT, recent_count as f64)
            .with_data(data_keys::OLDER_COUNT, older_count as f64),
    )
}

/// At least two check-ins in the window.
fn effortless(habit: &Habit, recent_count: usize) -> Option<DetectedPattern> {
    if recent_count < 2 {
        return None;
    }
    Some(DetectedPattern::for_habit(
        PatternType::EffortlessMoment,
        &habit.id,
        0.5,
    ))
}
