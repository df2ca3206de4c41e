//! RestartQuiz - Command handler for re-entering the quiz.

use super::SharedPreferenceStore;
use crate::domain::foundation::DomainError;
use crate::domain::profile::OnboardingStatus;

/// Result of a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestartQuizResult {
    pub previous_status: OnboardingStatus,
}

/// Handler for quiz restarts.
///
/// Restarting does not touch persistence: the last completed profile stays
/// on disk until the next completion replaces it.
pub struct RestartQuizHandler {
    store: SharedPreferenceStore,
}

impl RestartQuizHandler {
    pub fn new(store: SharedPreferenceStore) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<RestartQuizResult, DomainError> {
        let mut store = self.store.write().await;
        let previous_status = store.status();
        store.restart_quiz()?;
        Ok(RestartQuizResult { previous_status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::personality::standard_classifier;
    use crate::domain::profile::{PreferenceStore, UserPreferenceProfile};
    use crate::domain::quiz::{standard_deck, SwipeDecision};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    #[tokio::test]
    async fn restart_from_complete_empties_store() {
        let profile = UserPreferenceProfile {
            archetype_name: Some("Coastal Calm".to_string()),
            primary_style_tag: Some("coastal_calm".to_string()),
            onboarding_complete: true,
            ..Default::default()
        };
        let shared = Arc::new(RwLock::new(PreferenceStore::restore(
            standard_deck(),
            standard_classifier(),
            profile,
        )));
        let handler = RestartQuizHandler::new(shared.clone());

        let result = handler.handle().await.unwrap();

        assert_eq!(result.previous_status, OnboardingStatus::Complete);
        let store = shared.read().await;
        assert_eq!(store.status(), OnboardingStatus::Empty);
        assert!(store.profile().archetype_name.is_none());
    }

    #[tokio::test]
    async fn restart_mid_quiz_returns_to_first_card() {
        let shared = Arc::new(RwLock::new(PreferenceStore::new(
            standard_deck(),
            standard_classifier(),
        )));
        shared
            .write()
            .await
            .record_swipe(SwipeDecision::Accept)
            .unwrap();

        RestartQuizHandler::new(shared.clone()).handle().await.unwrap();

        let store = shared.read().await;
        assert_eq!(store.progress().answered, 0);
        assert!(store.vector().is_empty());
    }
}
