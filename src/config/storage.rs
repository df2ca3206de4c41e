//! Profile storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the preference profile is persisted
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Storage backend
    #[serde(default)]
    pub backend: StorageBackend,

    /// Profile file used by the `file` backend
    #[serde(default = "default_profile_path")]
    pub profile_path: PathBuf,
}

/// Profile storage backend
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process memory; lost on exit
    #[default]
    Memory,
    /// YAML file at `profile_path`
    File,
}

fn default_profile_path() -> PathBuf {
    PathBuf::from("./data/preference_profile.yaml")
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::File && self.profile_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.profile_path"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            profile_path: default_profile_path(),
        }
    }
}
