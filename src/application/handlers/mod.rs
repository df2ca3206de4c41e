//! Command and query handlers.
//!
//! - `onboarding` - Quiz swipes, restarts, project types, profile edits, restore
//! - `feed` - Ranked content feed

pub mod feed;
pub mod onboarding;

pub use feed::{FeedEntry, RankFeedHandler, RankFeedQuery, RankFeedResult};
pub use onboarding::{
    restore_preference_store, ProfileSaver, RecordSwipeCommand, RecordSwipeHandler,
    RecordSwipeResult, RestartQuizHandler, RestartQuizResult, SharedPreferenceStore, StageProjectTypesCommand,
    StageProjectTypesHandler, UpdateProfileCommand, UpdateProfileHandler, UpdateProfileResult,
};
