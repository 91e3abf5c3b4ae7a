//! Dashboard insights: generated records with their own rate limiting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::collections::FxHashMap;

/// Maximum persisted insights.
pub const INSIGHT_HISTORY_CAP: usize = 20;

/// Kind of insight surfaced on the dashboard feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Correlation,
    Pattern,
    Prompt,
}

impl InsightKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Correlation => "correlation",
            Self::Pattern => "pattern",
            Self::Prompt => "prompt",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Insight message payload.
///
/// Keyed messages are the normal path: a translation key plus interpolation
/// params, resolved by the localization layer. Literal text exists as a
/// legacy/demo fallback only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum InsightMessage {
    Keyed {
        key: String,
        #[serde(default)]
        params: FxHashMap<String, String>,
    },
    Literal {
        text: String,
    },
}

impl InsightMessage {
    pub fn keyed(key: &str) -> Self {
        Self::Keyed {
            key: key.to_string(),
            params: FxHashMap::default(),
        }
    }

    pub fn keyed_with(key: &str, params: &[(&str, &str)]) -> Self {
        Self::Keyed {
            key: key.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// One generated insight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub id: String,
    pub kind: InsightKind,
    pub message: InsightMessage,
    pub generated_at: DateTime<Utc>,
}

/// How often the user wants to see insights. Maps to a minimum number of
/// days between generation passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InsightFrequency {
    Rare,
    #[default]
    Occasional,
    Weekly,
}

impl InsightFrequency {
    /// Minimum days since the last generated insight.
    pub fn min_interval_days(&self) -> i64 {
        match self {
            Self::Rare => 14,
            Self::Occasional => 7,
            Self::Weekly => 3,
        }
    }

    /// How many insights one generation pass may return.
    pub fn batch_size(&self) -> usize {
        match self {
            Self::Rare | Self::Occasional => 1,
            Self::Weekly => 2,
        }
    }
}
