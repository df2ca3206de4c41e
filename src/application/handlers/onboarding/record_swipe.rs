//! RecordSwipe - Command handler for one quiz decision.

use tokio::task::JoinHandle;

use super::persist::ProfileSaver;
use super::SharedPreferenceStore;
use crate::domain::foundation::DomainError;
use crate::domain::profile::SwipeResult;
use crate::domain::quiz::SwipeDecision;

/// Command to answer the current card.
#[derive(Debug, Clone, Copy)]
pub struct RecordSwipeCommand {
    pub decision: SwipeDecision,
}

/// Result of a recorded swipe.
#[derive(Debug)]
pub struct RecordSwipeResult {
    pub outcome: SwipeResult,
    /// Background save started when the quiz completed.
    pub persistence: Option<JoinHandle<()>>,
}

/// Handler for quiz swipes.
pub struct RecordSwipeHandler {
    store: SharedPreferenceStore,
    saver: ProfileSaver,
}

impl RecordSwipeHandler {
    pub fn new(store: SharedPreferenceStore, saver: ProfileSaver) -> Self {
        Self { store, saver }
    }

    pub async fn handle(&self, cmd: RecordSwipeCommand) -> Result<RecordSwipeResult, DomainError> {
        let mut store = self.store.write().await;
        let outcome = store.record_swipe(cmd.decision)?;

        // Requested under the lock so save order follows change order.
        let persistence = match &outcome {
            SwipeResult::Completed { profile, .. } => Some(self.saver.save(profile.clone())),
            SwipeResult::Advanced { .. } => None,
        };
        drop(store);

        Ok(RecordSwipeResult {
            outcome,
            persistence,
        })
    }
}
