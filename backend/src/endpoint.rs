use shared::models::Tally;
use shared::validation::normalize_choice;
use tracing::{info, instrument, warn};

use crate::store::TallyStore;

/// Network-facing facade over the tally store.
#[derive(Debug, Default)]
pub struct PollEndpoint {
    store: TallyStore,
}

impl PollEndpoint {
    pub fn new(store: TallyStore) -> Self {
        Self { store }
    }

    /// Records a vote. Absent or unrecognized choices are logged and dropped.
    #[instrument(skip(self))]
    pub fn submit_vote(&self, raw: Option<&str>) {
        match normalize_choice(raw) {
            Ok(choice) => {
                let total = self.store.increment(choice);
                info!("Vote recorded: {} (Total: {})", choice.label(), total);
            }
            Err(e) => warn!("Invalid vote ignored: {}", e),
        }
    }

    pub fn get_current_counts(&self) -> String {
        self.store.snapshot().to_string()
    }

    pub fn tally(&self) -> Tally {
        self.store.snapshot()
    }
}
