//! In-Memory Content Source Adapter
//!
//! Serves a fixed catalog. The catalog can be replaced at runtime to
//! simulate a content refresh.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::ranking::ContentItem;
use crate::ports::{ContentSource, ContentSourceError};

/// Content source holding its catalog in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentSource {
    items: Arc<RwLock<Vec<ContentItem>>>,
}

impl InMemoryContentSource {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// Parse a YAML list of items
    pub fn from_yaml(yaml: &str) -> Result<Self, ContentSourceError> {
        let items: Vec<ContentItem> =
            serde_yaml::from_str(yaml).map_err(|e| ContentSourceError::Malformed(e.to_string()))?;
        Ok(Self::new(items))
    }

    /// Replace the catalog
    pub async fn replace(&self, items: Vec<ContentItem>) {
        *self.items.write().await = items;
    }
}

#[async_trait]
impl ContentSource for InMemoryContentSource {
    async fn fetch_catalog(&self) -> Result<Vec<ContentItem>, ContentSourceError> {
        Ok(self.items.read().await.clone())
    }
}
