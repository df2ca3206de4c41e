//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `quiz` - Trait cards, the swipe accumulator and deck traversal
//! - `personality` - Archetypes and the first-match classifier
//! - `ranking` - Content items and the three ranking modes
//! - `profile` - User preference profile and the onboarding store

pub mod foundation;
pub mod personality;
pub mod profile;
pub mod quiz;
pub mod ranking;
