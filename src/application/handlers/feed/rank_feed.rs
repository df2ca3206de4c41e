//! RankFeed - Query handler producing the ordered content feed.

use std::sync::Arc;

use crate::application::handlers::onboarding::SharedPreferenceStore;
use crate::domain::foundation::DomainError;
use crate::domain::ranking::{ContentItem, ContentRanker, RankingMode, ScoreBreakdown};
use crate::ports::ContentSource;

/// Query for one feed page.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankFeedQuery {
    pub mode: RankingMode,
}

/// One feed entry.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    pub item: ContentItem,
    /// Present in personalized mode only.
    pub score: Option<ScoreBreakdown>,
}

/// Ordered feed.
#[derive(Debug, Clone)]
pub struct RankFeedResult {
    pub mode: RankingMode,
    pub entries: Vec<FeedEntry>,
}

impl RankFeedResult {
    pub fn items(&self) -> impl Iterator<Item = &ContentItem> {
        self.entries.iter().map(|e| &e.item)
    }
}

/// Handler that fetches the catalog and ranks it against the current profile.
pub struct RankFeedHandler {
    store: SharedPreferenceStore,
    content: Arc<dyn ContentSource>,
    ranker: ContentRanker,
}

impl RankFeedHandler {
    pub fn new(
        store: SharedPreferenceStore,
        content: Arc<dyn ContentSource>,
        ranker: ContentRanker,
    ) -> Self {
        Self {
            store,
            content,
            ranker,
        }
    }

    pub async fn handle(&self, query: RankFeedQuery) -> Result<RankFeedResult, DomainError> {
        let catalog = self.content.fetch_catalog().await?;
        let profile = self.store.read().await.profile().clone();

        let entries = match query.mode {
            RankingMode::Personalized => self
                .ranker
                .rank_scored(&profile, &catalog)
                .into_iter()
                .map(|scored| FeedEntry {
                    item: scored.item.clone(),
                    score: Some(scored.breakdown),
                })
                .collect(),
            mode => self
                .ranker
                .rank(&profile, &catalog, mode)
                .into_iter()
                .map(|item| FeedEntry {
                    item: item.clone(),
                    score: None,
                })
                .collect(),
        };

        Ok(RankFeedResult {
            mode: query.mode,
            entries,
        })
    }
}
