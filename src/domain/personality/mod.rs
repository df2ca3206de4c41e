//! Personality module - Archetypes and first-match classification.
//!
//! Maps a completed [`PreferenceVector`](crate::domain::quiz::PreferenceVector)
//! to one [`Archetype`]. Rules are plain data, an ordered list of
//! `(conditions, archetype)` pairs, so new archetypes are added by
//! appending rules rather than editing branching code.
//!
//! # Invariants
//!
//! 1. Classification is total: the fallback always matches
//! 2. The first matching rule in declaration order wins
//! 3. Untouched or zero dimensions never count as a lean
//! 4. Archetype style tags are unique within a rule set

mod archetype;
mod catalog;
mod classifier;
mod errors;

pub use archetype::{style_tag_for, Archetype};
pub use catalog::standard_classifier;
pub use classifier::{
    ClassificationRule, Condition, PersonalityClassifier, RuleDefinition, RuleSetDefinition,
};
pub use errors::RuleSetError;
