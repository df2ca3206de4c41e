//! Content items as supplied by the external content source.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::{ContentId, Timestamp};

/// Engagement counters for one item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub saves: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub shares: u64,
}

impl Engagement {
    /// Creates engagement with likes and saves; comments and shares zero.
    pub fn new(likes: u64, saves: u64) -> Self {
        Self {
            likes,
            saves,
            ..Self::default()
        }
    }

    /// Popularity used by trending: likes plus saves.
    pub fn popularity(&self) -> u64 {
        self.likes.saturating_add(self.saves)
    }
}

/// One piece of rankable content.
///
/// Items are read-only to the engine: ranking orders references and never
/// mutates or stores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ContentId,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub engagement: Engagement,
    #[serde(default)]
    pub verified: bool,
    pub created_at: Timestamp,
}

impl ContentItem {
    /// Creates an untagged, unverified item with no engagement.
    pub fn new(id: ContentId, created_at: Timestamp) -> Self {
        Self {
            id,
            tags: BTreeSet::new(),
            project_type: None,
            style: None,
            engagement: Engagement::default(),
            verified: false,
            created_at,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_project_type(mut self, project_type: impl Into<String>) -> Self {
        self.project_type = Some(project_type.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_engagement(mut self, engagement: Engagement) -> Self {
        self.engagement = engagement;
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }
}
