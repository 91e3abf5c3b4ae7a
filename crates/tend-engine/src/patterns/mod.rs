//! Pattern detection over the entry log.
//!
//! `detect_patterns` is a pure function of (entries, habits, config, today):
//! no side effects, deterministic for identical inputs. Insufficient data is
//! an empty result, never an error.

pub mod context;
pub mod general;
pub mod habit;
pub mod pairs;

use chrono::NaiveDate;
use tracing::debug;

use tend_core::errors::EngineError;
use tend_core::types::{DayEntry, DetectedPattern, Habit};

use context::DetectionContext;

/// Minimum total entries before any detector runs.
const MIN_ENTRIES: usize = 3;

/// Configuration for one detection pass.
#[derive(Debug, Clone, Copy)]
pub struct DetectorConfig {
    /// Days covered by the recent window (and by the prior comparison
    /// window of equal length).
    pub lookback_days: u32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self { lookback_days: 14 }
    }
}

/// Scan entries and habits and emit every detected pattern.
///
/// `today` anchors all day-gap math; the engine never reads the clock.
/// Returns an empty list when fewer than [`MIN_ENTRIES`] entries exist or
/// no habit is actively tracked.
pub fn detect_patterns(
    entries: &[DayEntry],
    habits: &[Habit],
    config: DetectorConfig,
    today: NaiveDate,
) -> Result<Vec<DetectedPattern>, EngineError> {
    if config.lookback_days == 0 {
        return Err(EngineError::InvalidLookback {
            days: config.lookback_days,
        });
    }

    if entries.len() < MIN_ENTRIES || habits.iter().all(|h| h.resting) {
        return Ok(Vec::new());
    }

    let ctx = DetectionContext::build(entries, habits, config.lookback_days, today);

    let mut patterns = Vec::new();
    for habit in &ctx.habits {
        patterns.extend(habit::detect(&ctx, habit));
    }
    patterns.extend(pairs::detect(&ctx));
    patterns.extend(general::detect(&ctx));

    debug!(
        habits = ctx.habits.len(),
        recent_entries = ctx.recent.len(),
        patterns = patterns.len(),
        "detection pass complete"
    );

    Ok(patterns)
}
