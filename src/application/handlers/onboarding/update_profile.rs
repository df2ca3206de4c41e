//! UpdateProfile - Command handler for out-of-quiz profile edits.

use tokio::task::JoinHandle;

use super::persist::ProfileSaver;
use super::SharedPreferenceStore;
use crate::domain::profile::{ProfileEdit, UserPreferenceProfile};

/// Command to edit project types or the onboarding flag.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileCommand {
    pub edit: ProfileEdit,
}

/// Result of a profile edit.
#[derive(Debug)]
pub struct UpdateProfileResult {
    pub profile: UserPreferenceProfile,
    /// Background save; `None` when the edit changed nothing.
    pub persistence: Option<JoinHandle<()>>,
}

/// Handler for profile edits.
pub struct UpdateProfileHandler {
    store: SharedPreferenceStore,
    saver: ProfileSaver,
}

impl UpdateProfileHandler {
    pub fn new(store: SharedPreferenceStore, saver: ProfileSaver) -> Self {
        Self { store, saver }
    }

    pub async fn handle(&self, cmd: UpdateProfileCommand) -> UpdateProfileResult {
        if cmd.edit.is_empty() {
            return UpdateProfileResult {
                profile: self.store.read().await.profile().clone(),
                persistence: None,
            };
        }

        let mut store = self.store.write().await;
        let profile = store.update_profile(cmd.edit);
        let persistence = Some(self.saver.save(profile.clone()));
        drop(store);

        UpdateProfileResult {
            profile,
            persistence,
        }
    }
}
