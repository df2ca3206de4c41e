//! File Profile Repository Adapter
//!
//! Stores the preference profile as a single YAML file. Each write goes to
//! its own sibling temporary file and is renamed into place, so concurrent
//! saves never share a temp path.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;

use crate::domain::profile::UserPreferenceProfile;
use crate::ports::{ProfileRepository, RepositoryError};

/// YAML-file backed profile storage
#[derive(Debug, Clone)]
pub struct FileProfileRepository {
    path: PathBuf,
}

impl FileProfileRepository {
    /// Create a repository that reads and writes `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the profile file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Unique temp path for one write
    fn temp_path(&self) -> PathBuf {
        static WRITE_SEQ: AtomicU64 = AtomicU64::new(0);
        let seq = WRITE_SEQ.fetch_add(1, Ordering::Relaxed);
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(format!(".{}.{}.tmp", std::process::id(), seq));
        self.path.with_file_name(name)
    }

    async fn ensure_parent(&self) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| RepositoryError::IoError(e.to_string()))?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for FileProfileRepository {
    async fn load(&self) -> Result<UserPreferenceProfile, RepositoryError> {
        let yaml = match fs::read_to_string(&self.path).await {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RepositoryError::NotFound)
            }
            Err(e) => return Err(RepositoryError::IoError(e.to_string())),
        };

        serde_yaml::from_str(&yaml).map_err(|e| RepositoryError::DeserializationFailed(e.to_string()))
    }

    async fn save(&self, profile: &UserPreferenceProfile) -> Result<(), RepositoryError> {
        self.ensure_parent().await?;

        let yaml = serde_yaml::to_string(profile)
            .map_err(|e| RepositoryError::SerializationFailed(e.to_string()))?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, yaml)
            .await
            .map_err(|e| RepositoryError::IoError(e.to_string()))?;
        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(RepositoryError::IoError(e.to_string()));
        }

        tracing::debug!(path = %self.path.display(), "Profile saved");
        Ok(())
    }
}
