//! Ranking module - Content items and the three ranking modes.
//!
//! All functions are pure: they take the profile and catalog as input and
//! return ordered references into the catalog. No ports or adapters are
//! involved since ranking performs no I/O.

mod content_item;
mod ranker;
mod style_keywords;

pub use content_item::{ContentItem, Engagement};
pub use ranker::{
    engagement_boost, ContentRanker, RankingMode, ScoreBreakdown, ScoredItem, ENGAGEMENT_CAP,
    ENGAGEMENT_DIVISOR, KEYWORD_MATCH_POINTS, PROJECT_MATCH_POINTS, SAVE_WEIGHT,
    STYLE_LABEL_POINTS,
};
pub use style_keywords::{standard_style_keywords, StyleKeywordTable};
