use std::sync::{Mutex, MutexGuard, PoisonError};
use shared::models::{Tally, VoteChoice};

/// The three vote counters behind a single lock.
///
/// Increments and snapshots share one critical section, so a snapshot always
/// reflects some prefix of the completed increments and never a torn mix.
#[derive(Debug, Default)]
pub struct TallyStore {
    counts: Mutex<Tally>,
}

impl TallyStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tally> {
        // Each critical section is a single add or copy, so a poisoned guard still holds valid counts.
        self.counts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds one vote and returns the new count for that choice.
    pub fn increment(&self, choice: VoteChoice) -> u64 {
        let mut counts = self.lock();
        let slot = counts.get_mut(choice);
        *slot += 1;
        *slot
    }

    pub fn snapshot(&self) -> Tally {
        *self.lock()
    }
}
