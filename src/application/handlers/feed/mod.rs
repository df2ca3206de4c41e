//! Feed query handlers.

mod rank_feed;

pub use rank_feed::{FeedEntry, RankFeedHandler, RankFeedQuery, RankFeedResult};
