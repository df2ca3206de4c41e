//! Wiring of configuration into domain content and adapters.

use std::sync::Arc;

use crate::adapters::{FileProfileRepository, InMemoryProfileRepository};
use crate::application::handlers::{restore_preference_store, ProfileSaver, SharedPreferenceStore};
use crate::config::{AppConfig, ConfigError, StorageBackend};
use crate::domain::personality::PersonalityClassifier;
use crate::domain::quiz::TraitDeck;
use crate::domain::ranking::ContentRanker;
use crate::ports::ProfileRepository;

/// Everything handlers need, built once at startup.
#[derive(Clone)]
pub struct AppContext {
    pub deck: Arc<TraitDeck>,
    pub classifier: Arc<PersonalityClassifier>,
    pub ranker: ContentRanker,
    pub repository: Arc<dyn ProfileRepository>,
    /// The one writer every persisting handler must share.
    pub saver: ProfileSaver,
}

impl AppContext {
    /// Validates the configuration and loads content and storage.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for invalid settings or unreadable/invalid
    /// catalog override files.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let deck = config.catalog.load_deck()?;
        let classifier = config.catalog.load_classifier()?;
        let ranker = ContentRanker::new(config.catalog.load_style_keywords()?);

        let repository: Arc<dyn ProfileRepository> = match config.storage.backend {
            StorageBackend::Memory => Arc::new(InMemoryProfileRepository::new()),
            StorageBackend::File => {
                Arc::new(FileProfileRepository::new(&config.storage.profile_path))
            }
        };

        tracing::info!(
            backend = ?config.storage.backend,
            cards = deck.len(),
            rules = classifier.rules().len(),
            "Application context ready"
        );

        let saver = ProfileSaver::new(repository.clone());

        Ok(Self {
            deck,
            classifier,
            ranker,
            repository,
            saver,
        })
    }

    /// Builds the shared store from the persisted profile.
    pub async fn restore_store(&self) -> SharedPreferenceStore {
        restore_preference_store(
            self.repository.as_ref(),
            self.deck.clone(),
            self.classifier.clone(),
        )
        .await
    }
}
