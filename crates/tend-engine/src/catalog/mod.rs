//! Observation catalog: the static library plus a pattern-type index.
//!
//! The index is built once at construction, so candidate lookup during
//! selection is a map hit instead of a scan, and adding a catalog entry for
//! an unknown pattern type is impossible by construction.

mod library;

use tend_core::types::collections::FxHashMap;
use tend_core::types::{Observation, ObservationCategory, PatternType};

/// The static observation catalog with a pattern-type lookup index.
pub struct ObservationCatalog {
    entries: &'static [Observation],
    by_pattern: FxHashMap<PatternType, Vec<usize>>,
}

impl ObservationCatalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self::from_entries(library::ENTRIES)
    }

    fn from_entries(entries: &'static [Observation]) -> Self {
        let mut by_pattern: FxHashMap<PatternType, Vec<usize>> = FxHashMap::default();
        for (index, observation) in entries.iter().enumerate() {
            by_pattern
                .entry(observation.conditions.pattern_type)
                .or_default()
                .push(index);
        }
        Self {
            entries,
            by_pattern,
        }
    }

    /// All catalog observations for a pattern type.
    pub fn for_pattern(&self, pattern_type: PatternType) -> impl Iterator<Item = &Observation> {
        self.by_pattern
            .get(&pattern_type)
            .into_iter()
            .flatten()
            .map(|index| &self.entries[*index])
    }

    /// Look up one observation by id.
    pub fn get(&self, id: &str) -> Option<&Observation> {
        self.entries.iter().find(|o| o.id == id)
    }

    /// Category of a previously shown observation id, if it still exists in
    /// the catalog.
    pub fn category_of(&self, id: &str) -> Option<ObservationCategory> {
        self.get(id).map(|o| o.category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ObservationCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
