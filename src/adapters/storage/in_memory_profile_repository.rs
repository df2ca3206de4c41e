//! In-Memory Profile Repository Adapter
//!
//! Keeps the profile in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::profile::UserPreferenceProfile;
use crate::ports::{ProfileRepository, RepositoryError};

/// In-memory storage for the preference profile
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profile: Arc<RwLock<Option<UserPreferenceProfile>>>,
    saves: Arc<RwLock<usize>>,
}

impl InMemoryProfileRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository already holding `profile`
    pub fn with_profile(profile: UserPreferenceProfile) -> Self {
        Self {
            profile: Arc::new(RwLock::new(Some(profile))),
            saves: Arc::new(RwLock::new(0)),
        }
    }

    /// Get the stored profile without going through the port
    pub async fn stored(&self) -> Option<UserPreferenceProfile> {
        self.profile.read().await.clone()
    }

    /// Get the number of successful saves
    pub async fn save_count(&self) -> usize {
        *self.saves.read().await
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn load(&self) -> Result<UserPreferenceProfile, RepositoryError> {
        self.profile
            .read()
            .await
            .clone()
            .ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, profile: &UserPreferenceProfile) -> Result<(), RepositoryError> {
        *self.profile.write().await = Some(profile.clone());
        *self.saves.write().await += 1;
        Ok(())
    }
}
