//! ProfileRepository port for durable preference persistence.
//!
//! Holds exactly one profile: the local user's. Writes replace the whole
//! record; there is no versioning or merge.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::profile::UserPreferenceProfile;

/// Errors that can occur during profile persistence
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("No persisted profile")]
    NotFound,

    #[error("Failed to serialize profile: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize profile: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl RepositoryError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RepositoryError::NotFound => ErrorCode::ProfileNotFound,
            _ => ErrorCode::StorageError,
        }
    }
}

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

/// Port for loading and saving the preference profile
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Load the persisted profile
    ///
    /// # Errors
    /// Returns `RepositoryError::NotFound` if nothing was ever saved
    async fn load(&self) -> Result<UserPreferenceProfile, RepositoryError>;

    /// Replace the persisted profile
    async fn save(&self, profile: &UserPreferenceProfile) -> Result<(), RepositoryError>;
}
