//! Personality → category affinity re-weighting.
//!
//! Boosts are additive and stack; the profile never filters a candidate out.

use tend_core::types::{
    Approach, Energy, Motivation, ObservationCategory, Pace, PersonalityProfile, Recovery,
};

/// Solitude recovery or a slow pace leans toward reflective categories.
pub const BOOST_REFLECTIVE: f64 = 0.2;
/// Outer motivation or a fast pace leans toward rhythm and change.
pub const BOOST_OUTWARD: f64 = 0.2;
/// A structured approach leans toward regularity.
pub const BOOST_STRUCTURED: f64 = 0.15;
/// Wave or burst energy leans toward pauses and change.
pub const BOOST_UNEVEN_ENERGY: f64 = 0.15;

/// Total additive boost for one candidate category under a profile.
pub fn category_boost(profile: &PersonalityProfile, category: ObservationCategory) -> f64 {
    use ObservationCategory::*;

    let mut boost = 0.0;

    if (profile.recovery == Recovery::Solitude || profile.pace == Pace::Slow)
        && matches!(category, Meta | Relationship | OpenEnd)
    {
        boost += BOOST_REFLECTIVE;
    }

    if (profile.motivation == Motivation::Outer || profile.pace == Pace::Fast)
        && matches!(category, RhythmTime | WeekdayCycle | ChangeOverTime)
    {
        boost += BOOST_OUTWARD;
    }

    if profile.approach == Approach::Structured
        && matches!(category, QuietRegularity | RhythmTime)
    {
        boost += BOOST_STRUCTURED;
    }

    if matches!(profile.energy, Energy::Waves | Energy::Bursts)
        && matches!(category, PauseBreak | ChangeOverTime)
    {
        boost += BOOST_UNEVEN_ENERGY;
    }

    boost
}
