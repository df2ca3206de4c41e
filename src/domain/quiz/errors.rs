//! Quiz-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while traversing the deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// A decision arrived after every card was already answered.
    #[error("Quiz already complete: all {deck_len} cards have been answered")]
    AlreadyComplete { deck_len: usize },
}

impl QuizError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            QuizError::AlreadyComplete { .. } => ErrorCode::QuizAlreadyComplete,
        }
    }
}

impl From<QuizError> for DomainError {
    fn from(err: QuizError) -> Self {
        let code = err.code();
        match &err {
            QuizError::AlreadyComplete { deck_len } => DomainError::new(code, err.to_string())
                .with_detail("deck_len", deck_len.to_string()),
        }
    }
}
