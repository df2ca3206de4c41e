//! Background profile persistence.
//!
//! Saves never block the caller, but they are applied one at a time and in
//! the order they were requested: a save that was overtaken by a newer one
//! is skipped, so the record on disk always converges to the latest profile.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::domain::profile::UserPreferenceProfile;
use crate::ports::ProfileRepository;

/// Serialized, last-write-wins writer shared by every handler that persists.
///
/// Request saves while still holding the store's write lock so that
/// generation order matches the order of in-memory changes.
#[derive(Clone)]
pub struct ProfileSaver {
    repository: Arc<dyn ProfileRepository>,
    requested: Arc<AtomicU64>,
    // Generation of the most recent save attempted against the repository.
    applied: Arc<Mutex<u64>>,
}

impl ProfileSaver {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self {
            repository,
            requested: Arc::new(AtomicU64::new(0)),
            applied: Arc::new(Mutex::new(0)),
        }
    }

    pub fn repository(&self) -> &Arc<dyn ProfileRepository> {
        &self.repository
    }

    /// Saves `profile` on a background task.
    ///
    /// Failures are logged and otherwise ignored; the in-memory store stays
    /// authoritative. The handle lets callers wait for the write.
    pub fn save(&self, profile: UserPreferenceProfile) -> JoinHandle<()> {
        let generation = self.requested.fetch_add(1, Ordering::SeqCst) + 1;
        let repository = self.repository.clone();
        let applied = self.applied.clone();

        tokio::spawn(async move {
            let mut last = applied.lock().await;
            if *last > generation {
                tracing::debug!(generation, latest = *last, "Skipping superseded profile save");
                return;
            }
            *last = generation;

            match repository.save(&profile).await {
                Ok(()) => tracing::debug!(
                    generation,
                    archetype = ?profile.archetype_name,
                    onboarding_complete = profile.onboarding_complete,
                    "Profile persisted"
                ),
                Err(e) => tracing::warn!(generation, error = %e, "Failed to persist profile"),
            }
        })
    }
}

impl std::fmt::Debug for ProfileSaver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileSaver")
            .field("requested", &self.requested.load(Ordering::SeqCst))
            .finish()
    }
}
