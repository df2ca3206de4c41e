//! ContentSource port - Supplies the catalog for each rank call.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::ranking::ContentItem;

/// Errors raised while fetching the catalog
#[derive(Debug, thiserror::Error)]
pub enum ContentSourceError {
    #[error("Content source unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed content: {0}")]
    Malformed(String),
}

impl From<ContentSourceError> for DomainError {
    fn from(err: ContentSourceError) -> Self {
        DomainError::new(ErrorCode::ContentSourceError, err.to_string())
    }
}

/// Port for retrieving rankable content
///
/// Implementations return the full catalog; the engine neither paginates
/// nor caches it.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Vec<ContentItem>, ContentSourceError>;
}
