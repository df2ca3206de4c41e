//! Onboarding command handlers.
//!
//! All handlers share one [`SharedPreferenceStore`]. Store mutations are
//! synchronous under the write lock; persistence goes through one shared
//! [`ProfileSaver`], which writes in request order on background tasks.

mod persist;
mod record_swipe;
mod restart_quiz;
mod restore;
mod stage_project_types;
mod update_profile;

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::profile::PreferenceStore;

/// The single owned preference store, shared by handlers.
pub type SharedPreferenceStore = Arc<RwLock<PreferenceStore>>;

pub use persist::ProfileSaver;
pub use record_swipe::{RecordSwipeCommand, RecordSwipeHandler, RecordSwipeResult};
pub use restart_quiz::{RestartQuizHandler, RestartQuizResult};
pub use restore::restore_preference_store;
pub use stage_project_types::{StageProjectTypesCommand, StageProjectTypesHandler};
pub use update_profile::{UpdateProfileCommand, UpdateProfileHandler, UpdateProfileResult};
