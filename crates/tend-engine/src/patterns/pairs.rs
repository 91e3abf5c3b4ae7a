//! Pairwise detectors over all non-resting habits.

use tend_core::types::pattern::data_keys;
use tend_core::types::{DetectedPattern, PatternType};

use super::context::DetectionContext;

/// Minimum same-day joint completions for either pair pattern.
const MIN_JOINT_DAYS: usize = 3;
/// Minimum co-occurrence ratio for habits-together.
const MIN_TOGETHER_RATIO: f64 = 0.5;

/// Run both pair detectors over every habit pair.
pub fn detect(ctx: &DetectionContext<'_>) -> Vec<DetectedPattern> {
    let mut patterns = Vec::new();

    for (i, a) in ctx.habits.iter().enumerate() {
        for b in ctx.habits.iter().skip(i + 1) {
            let count_a = ctx.recent_done(&a.id).len();
            let count_b = ctx.recent_done(&b.id).len();
            let joint = joint_done_days(ctx, &a.id, &b.id);

            // Unordered: both habits active enough, strong same-day overlap.
            if count_a >= 3 && count_b >= 3 && joint >= MIN_JOINT_DAYS {
                let ratio = joint as f64 / count_a.min(count_b) as f64;
                if ratio >= MIN_TOGETHER_RATIO {
                    patterns.push(
                        DetectedPattern::for_pair(PatternType::HabitsTogether, &a.id, &b.id, ratio)
                            .with_data(data_keys::JOINT_COUNT, joint as f64),
                    );
                }
            }

            // Ordered: earlier anchor strictly precedes the later one.
            for (first, second) in [(a, b), (b, a)] {
                let (Some(first_order), Some(second_order)) =
                    (first.time_anchor.order(), second.time_anchor.order())
                else {
                    continue;
                };
                if first_order >= second_order || joint < MIN_JOINT_DAYS {
                    continue;
                }
                patterns.push(
                    DetectedPattern::for_pair(
                        PatternType::HabitSequence,
                        &first.id,
                        &second.id,
                        joint as f64 / 5.0,
                    )
                    .with_data(data_keys::JOINT_COUNT, joint as f64),
                );
            }
        }
    }

    patterns
}

/// Days in the recent window where both habits were done.
fn joint_done_days(ctx: &DetectionContext<'_>, a: &str, b: &str) -> usize {
    ctx.recent
        .iter()
        .filter(|(entry, _)| entry.is_done(a) && entry.is_done(b))
        .count()
}
