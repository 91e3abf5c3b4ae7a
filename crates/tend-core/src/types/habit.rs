//! Habit definitions: what a user is tending to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rough time of day a habit tends to happen. No literal timestamp is ever
/// recorded per check-in; the anchor is the only timing signal available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeAnchor {
    Morning,
    Midday,
    Evening,
    #[default]
    None,
}

impl TimeAnchor {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Midday => "midday",
            Self::Evening => "evening",
            Self::None => "none",
        }
    }

    /// Position in the fixed morning → midday → evening order, or `None`
    /// for unanchored habits. Used for sequence detection between habits.
    pub fn order(&self) -> Option<u8> {
        match self {
            Self::Morning => Some(0),
            Self::Midday => Some(1),
            Self::Evening => Some(2),
            Self::None => None,
        }
    }
}

impl fmt::Display for TimeAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How often the user loosely intends the habit. Never enforced — there are
/// no streaks or targets anywhere in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SoftFrequency {
    Daily,
    FewTimesWeek,
    #[default]
    Free,
}

impl SoftFrequency {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::FewTimesWeek => "few-times-week",
            Self::Free => "free",
        }
    }
}

/// Reminder settings carried with the habit. Scheduling and delivery are an
/// external concern; the engine only stores this as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ReminderConfig {
    pub enabled: bool,
    /// Hour of day (0–23) when a reminder should fire.
    pub hour: Option<u8>,
    pub minute: Option<u8>,
}

/// A tracked habit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub emoji: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub time_anchor: TimeAnchor,
    #[serde(default)]
    pub soft_frequency: SoftFrequency,
    /// A resting habit is soft-deleted: excluded from active tracking and
    /// pattern detection, but not destroyed.
    #[serde(default)]
    pub resting: bool,
    #[serde(default)]
    pub reminder: ReminderConfig,
}

impl Habit {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            emoji: None,
            description: None,
            time_anchor: TimeAnchor::None,
            soft_frequency: SoftFrequency::Free,
            resting: false,
            reminder: ReminderConfig::default(),
        }
    }

    /// Display name with emoji prefix when present, trimmed.
    pub fn display_name(&self) -> String {
        match &self.emoji {
            Some(emoji) => format!("{} {}", emoji, self.name).trim().to_string(),
            None => self.name.trim().to_string(),
        }
    }
}
