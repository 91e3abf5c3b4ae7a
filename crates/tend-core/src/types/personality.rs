//! Personality profile: seven independent spectrum axes from onboarding.
//!
//! The profile is only ever a soft re-weighting signal for selection, never
//! a hard filter.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Rhythm {
    Morning,
    Evening,
    #[default]
    Flexible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Energy {
    #[default]
    Steady,
    Waves,
    Bursts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Motivation {
    Inner,
    Outer,
    #[default]
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Approach {
    Structured,
    Spontaneous,
    #[default]
    Drifting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    Single,
    Switching,
    #[default]
    Parallel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Recovery {
    Solitude,
    Company,
    #[default]
    Movement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Slow,
    #[default]
    Moderate,
    Fast,
}

/// The full seven-axis profile. Immutable after onboarding except via an
/// explicit profile reset or edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PersonalityProfile {
    pub rhythm: Rhythm,
    pub energy: Energy,
    pub motivation: Motivation,
    pub approach: Approach,
    pub focus: Focus,
    pub recovery: Recovery,
    pub pace: Pace,
}
