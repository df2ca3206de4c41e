//! Deck traversal: the swipe accumulator with its position bookkeeping.

use serde::Serialize;
use std::sync::Arc;

use super::{PreferenceVector, QuizError, SwipeDecision, TraitCard, TraitDeck};

/// How far through the deck a session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizProgress {
    pub answered: usize,
    pub total: usize,
}

impl QuizProgress {
    /// Fraction of the deck answered, in `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.answered as f64 / self.total as f64
    }
}

/// Result of committing one decision.
#[derive(Debug, Clone, PartialEq)]
pub enum SwipeOutcome {
    /// More cards remain; `next_index` is the card now showing.
    Advanced { next_index: usize },
    /// The last card was answered; the vector is final.
    Completed,
}

/// One pass through a deck.
///
/// Decisions are committed exactly once, in deck order. There is no undo;
/// the only way back is [`QuizSession::restart`].
#[derive(Debug, Clone)]
pub struct QuizSession {
    deck: Arc<TraitDeck>,
    current_index: usize,
    vector: PreferenceVector,
}

impl QuizSession {
    /// Starts a fresh pass over the deck.
    pub fn new(deck: Arc<TraitDeck>) -> Self {
        Self {
            deck,
            current_index: 0,
            vector: PreferenceVector::new(),
        }
    }

    /// Returns the card awaiting a decision, `None` once complete.
    pub fn current_card(&self) -> Option<&TraitCard> {
        self.deck.get(self.current_index)
    }

    /// Index of the card awaiting a decision.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the vector accumulated so far.
    pub fn vector(&self) -> &PreferenceVector {
        &self.vector
    }

    /// Returns the deck being traversed.
    pub fn deck(&self) -> &Arc<TraitDeck> {
        &self.deck
    }

    /// Returns answered and total card counts.
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            answered: self.current_index,
            total: self.deck.len(),
        }
    }

    /// True once every card has been answered.
    pub fn is_complete(&self) -> bool {
        self.current_index >= self.deck.len()
    }

    /// Commits a decision for the current card and advances by one.
    ///
    /// # Errors
    ///
    /// - `AlreadyComplete` if every card has already been answered
    pub fn record(&mut self, decision: SwipeDecision) -> Result<SwipeOutcome, QuizError> {
        let card = self.deck.get(self.current_index).ok_or(QuizError::AlreadyComplete {
            deck_len: self.deck.len(),
        })?;

        self.vector.fold_decision(card, decision);
        self.current_index += 1;

        tracing::debug!(
            card_id = %card.id(),
            decision = ?decision,
            answered = self.current_index,
            total = self.deck.len(),
            "Swipe recorded"
        );

        if self.is_complete() {
            Ok(SwipeOutcome::Completed)
        } else {
            Ok(SwipeOutcome::Advanced {
                next_index: self.current_index,
            })
        }
    }

    /// Discards all decisions and returns to the first card.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.vector = PreferenceVector::new();
    }
}
