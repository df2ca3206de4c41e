//! Startup restore of the preference store from persistence.

use std::sync::Arc;
use tokio::sync::RwLock;

use super::SharedPreferenceStore;
use crate::domain::personality::PersonalityClassifier;
use crate::domain::profile::PreferenceStore;
use crate::domain::quiz::TraitDeck;
use crate::ports::{ProfileRepository, RepositoryError};

/// Loads the persisted profile into a fresh store.
///
/// Never fails: a missing record starts empty, and an unreadable one is
/// logged and also starts empty.
pub async fn restore_preference_store(
    repository: &dyn ProfileRepository,
    deck: Arc<TraitDeck>,
    classifier: Arc<PersonalityClassifier>,
) -> SharedPreferenceStore {
    let store = match repository.load().await {
        Ok(profile) => {
            let store = PreferenceStore::restore(deck, classifier, profile);
            tracing::info!(status = %store.status(), "Preference profile restored");
            store
        }
        Err(RepositoryError::NotFound) => {
            tracing::info!("No persisted preference profile; starting empty");
            PreferenceStore::new(deck, classifier)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Persisted preference profile unreadable; starting empty");
            PreferenceStore::new(deck, classifier)
        }
    };

    Arc::new(RwLock::new(store))
}

#[cfg(test)]
mod tests {
    use super::super::persist::test_support::FailingProfileRepository;
    use super::*;
    use crate::adapters::InMemoryProfileRepository;
    use crate::domain::personality::standard_classifier;
    use crate::domain::profile::{OnboardingStatus, UserPreferenceProfile};
    use crate::domain::quiz::standard_deck;

    #[tokio::test]
    async fn restores_completed_profile() {
        let profile = UserPreferenceProfile {
            archetype_name: Some("Bold Maximalist".to_string()),
            primary_style_tag: Some("bold_maximalist".to_string()),
            onboarding_complete: true,
            ..Default::default()
        };
        let repo = InMemoryProfileRepository::with_profile(profile.clone());

        let shared = restore_preference_store(&repo, standard_deck(), standard_classifier()).await;

        let store = shared.read().await;
        assert_eq!(store.status(), OnboardingStatus::Complete);
        assert_eq!(store.profile(), &profile);
        assert_eq!(store.archetype().map(|a| a.name.as_str()), Some("Bold Maximalist"));
    }

    #[tokio::test]
    async fn missing_profile_starts_empty() {
        let repo = InMemoryProfileRepository::new();
        let shared = restore_preference_store(&repo, standard_deck(), standard_classifier()).await;
        assert_eq!(shared.read().await.status(), OnboardingStatus::Empty);
    }

    #[tokio::test]
    async fn unreadable_profile_starts_empty() {
        let shared =
            restore_preference_store(&FailingProfileRepository, standard_deck(), standard_classifier())
                .await;
        let store = shared.read().await;
        assert_eq!(store.status(), OnboardingStatus::Empty);
        assert_eq!(store.profile(), &UserPreferenceProfile::default());
    }
}
