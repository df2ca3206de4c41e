//! Quiz module - Trait cards, swipe accumulation and deck traversal.
//!
//! A quiz is a single pass over a fixed-order [`TraitDeck`]. Every swipe
//! folds the current card's signed weights into a [`PreferenceVector`];
//! once the last card is answered the vector is handed to the personality
//! classifier.
//!
//! # Invariants
//!
//! 1. Every card tags at least one dimension
//! 2. Card ids are unique within a deck
//! 3. Deck order is presentation order and is never shuffled
//! 4. Decisions are applied exactly once, in order, with no undo

mod errors;
mod preference_vector;
mod session;
mod standard_deck;
mod trait_card;

pub use errors::QuizError;
pub use preference_vector::{apply_decision, PreferenceVector, SwipeDecision};
pub use session::{QuizProgress, QuizSession, SwipeOutcome};
pub use standard_deck::{dimensions, standard_deck};
pub use trait_card::{CardKind, TraitCard, TraitDeck, TraitWeight};
