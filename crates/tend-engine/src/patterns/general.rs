//! Habit-independent detectors over the whole recent window.

use tend_core::types::pattern::data_keys;
use tend_core::types::{DetectedPattern, HabitState, PatternType};

use crate::timeline;

use super::context::DetectionContext;

/// Run all general detectors.
pub fn detect(ctx: &DetectionContext<'_>) -> Vec<DetectedPattern> {
    let mut patterns = Vec::new();
    patterns.extend(aggregate_skips(ctx));
    patterns.extend(aggregate_effortless(ctx));
    patterns.extend(general(ctx));
    patterns
}

/// Three or more conscious skips across all habits in the window.
fn aggregate_skips(ctx: &DetectionContext<'_>) -> Option<DetectedPattern> {
    let total: usize = ctx
        .habits
        .iter()
        .map(|habit| timeline::count_state(&ctx.recent, &habit.id, HabitState::ConsciousSkip))
        .sum();
    if total < 3 {
        return None;
    }
    Some(
        DetectedPattern::general(PatternType::ConsciousSkip, total as f64 / 5.0)
            .with_data(data_keys::SKIP_COUNT, total as f64),
    )
}

/// Five or more days in the window with at least one habit done.
fn aggregate_effortless(ctx: &DetectionContext<'_>) -> Option<DetectedPattern> {
    let engaged = timeline::days_with_any_done(&ctx.recent);
    if engaged < 5 {
        return None;
    }
    Some(
        DetectedPattern::general(
            PatternType::EffortlessMoment,
            engaged as f64 / f64::from(ctx.lookback_days),
        )
        .with_data(data_keys::ENGAGED_DAYS, engaged as f64),
    )
}

/// Enough data in the window to carry generic observations. The entry count
/// rides along as `days_of_data` for downstream min-data gating.
fn general(ctx: &DetectionContext<'_>) -> Option<DetectedPattern> {
    if ctx.recent.len() < 7 {
        return None;
    }
    Some(
        DetectedPattern::general(PatternType::General, 0.4)
            .with_data(data_keys::DAYS_OF_DATA, ctx.recent.len() as f64),
    )
}
