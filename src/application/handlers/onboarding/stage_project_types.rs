//! StageProjectTypes - Command handler for onboarding project picks.

use std::collections::BTreeSet;

use super::SharedPreferenceStore;

/// Command carrying the project types picked during onboarding.
#[derive(Debug, Clone, Default)]
pub struct StageProjectTypesCommand {
    pub project_types: BTreeSet<String>,
}

/// Handler that stages project types until the quiz completes.
pub struct StageProjectTypesHandler {
    store: SharedPreferenceStore,
}

impl StageProjectTypesHandler {
    pub fn new(store: SharedPreferenceStore) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: StageProjectTypesCommand) {
        let count = cmd.project_types.len();
        self.store
            .write()
            .await
            .stage_project_types(cmd.project_types);
        tracing::debug!(count, "Project types staged");
    }
}
