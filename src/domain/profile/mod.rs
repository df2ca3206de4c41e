//! Profile module - The user preference profile and its onboarding store.
//!
//! # State machine
//!
//! ```text
//!   Empty ──first swipe──► InProgress ──last swipe──► Complete
//!     ▲                        │                         │
//!     └──────── restart ───────┴──────── restart ────────┘
//! ```

mod preference_profile;
mod status;
mod store;

pub use preference_profile::{ProfileEdit, UserPreferenceProfile};
pub use status::OnboardingStatus;
pub use store::{PreferenceStore, SwipeResult};
