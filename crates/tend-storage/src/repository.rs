//! Typed repository over the key-value state store.
//!
//! One well-known key per record type. The repository is the only layer
//! that knows the keys; callers work with domain types.

use tracing::{debug, warn};

use tend_core::errors::StorageError;
use tend_core::traits::StateStore;
use tend_core::types::insight::INSIGHT_HISTORY_CAP;
use tend_core::types::{
    DayEntry, Habit, Insight, InsightFrequency, ObservationState, PersonalityProfile,
};

mod keys {
    pub const HABITS: &str = "habits";
    pub const ENTRIES: &str = "entries";
    pub const PERSONALITY: &str = "personality";
    pub const OBSERVATION_STATE: &str = "observation_state";
    pub const INSIGHTS: &str = "insights";
    pub const INSIGHT_FREQUENCY: &str = "insight_frequency";
}

/// Typed facade over a [`StateStore`] backend.
pub struct StateRepository<S: StateStore> {
    store: S,
}

impl<S: StateStore> StateRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // --- habits ---

    pub fn habits(&self) -> Result<Vec<Habit>, StorageError> {
        Ok(self.store.load(keys::HABITS)?.unwrap_or_default())
    }

    pub fn save_habits(&self, habits: &[Habit]) -> Result<(), StorageError> {
        self.store.save(keys::HABITS, &habits)
    }

    /// Soft-delete a habit. Returns false when the id is unknown.
    pub fn rest_habit(&self, habit_id: &str) -> Result<bool, StorageError> {
        self.set_resting(habit_id, true)
    }

    /// Bring a resting habit back. Returns false when the id is unknown.
    pub fn wake_habit(&self, habit_id: &str) -> Result<bool, StorageError> {
        self.set_resting(habit_id, false)
    }

    fn set_resting(&self, habit_id: &str, resting: bool) -> Result<bool, StorageError> {
        let mut habits = self.habits()?;
        let Some(habit) = habits.iter_mut().find(|h| h.id == habit_id) else {
            return Ok(false);
        };
        habit.resting = resting;
        self.save_habits(&habits)?;
        Ok(true)
    }

    // --- day entries ---

    pub fn entries(&self) -> Result<Vec<DayEntry>, StorageError> {
        Ok(self.store.load(keys::ENTRIES)?.unwrap_or_default())
    }

    /// Upsert one day's entry, preserving the one-entry-per-date invariant.
    ///
    /// An existing entry for the date is merged with the incoming one; a new
    /// date is inserted keeping the list sorted by date.
    pub fn upsert_entry(&self, entry: DayEntry) -> Result<(), StorageError> {
        let mut entries = self.entries()?;
        match entries.iter_mut().find(|e| e.date == entry.date) {
            Some(existing) => existing.merge(entry),
            None => {
                entries.push(entry);
                entries.sort_by(|a, b| a.date.cmp(&b.date));
            }
        }
        self.store.save(keys::ENTRIES, &entries)
    }

    // --- personality & preferences ---

    pub fn personality(&self) -> Result<Option<PersonalityProfile>, StorageError> {
        self.store.load(keys::PERSONALITY)
    }

    pub fn save_personality(&self, profile: &PersonalityProfile) -> Result<(), StorageError> {
        self.store.save(keys::PERSONALITY, profile)
    }

    pub fn insight_frequency(&self) -> Result<InsightFrequency, StorageError> {
        Ok(self.store.load(keys::INSIGHT_FREQUENCY)?.unwrap_or_default())
    }

    pub fn save_insight_frequency(&self, frequency: InsightFrequency) -> Result<(), StorageError> {
        self.store.save(keys::INSIGHT_FREQUENCY, &frequency)
    }

    // --- observation state ---

    /// Load the selection state. A missing record yields a fresh default; so
    /// does a corrupt one, since losing shown-history only means an
    /// observation may repeat earlier than its cooldown intends.
    pub fn observation_state(&self) -> Result<ObservationState, StorageError> {
        match self.store.load(keys::OBSERVATION_STATE) {
            Ok(Some(state)) => Ok(state),
            Ok(None) => Ok(ObservationState::default()),
            Err(StorageError::SerdeError { message }) => {
                warn!(%message, "corrupt observation state, starting fresh");
                Ok(ObservationState::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn save_observation_state(&self, state: &ObservationState) -> Result<(), StorageError> {
        self.store.save(keys::OBSERVATION_STATE, state)
    }

    // --- insights ---

    pub fn insights(&self) -> Result<Vec<Insight>, StorageError> {
        Ok(self.store.load(keys::INSIGHTS)?.unwrap_or_default())
    }

    /// Prepend freshly generated insights, newest first, capped.
    pub fn push_insights(&self, new: &[Insight]) -> Result<Vec<Insight>, StorageError> {
        let mut insights = self.insights()?;
        for insight in new.iter().rev() {
            insights.insert(0, insight.clone());
        }
        insights.truncate(INSIGHT_HISTORY_CAP);
        self.store.save(keys::INSIGHTS, &insights)?;
        debug!(added = new.len(), total = insights.len(), "insights persisted");
        Ok(insights)
    }
}
