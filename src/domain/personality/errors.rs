//! Rule set configuration errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors detected while building a classifier rule set.
///
/// All of these are programmer or configuration mistakes and are raised
/// at construction time, never during classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleSetError {
    #[error("Rule set has no unconditional fallback archetype")]
    MissingFallback,

    #[error("Rule for '{archetype}' has no conditions; only the fallback may be unconditional")]
    UnconditionalRule { archetype: String },

    #[error("Archetype style tag '{style_tag}' is used more than once")]
    DuplicateArchetype { style_tag: String },

    #[error("Archetype name cannot be empty")]
    EmptyArchetypeName,

    #[error("Rule set could not be parsed: {0}")]
    Parse(String),
}

impl RuleSetError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RuleSetError::MissingFallback => ErrorCode::MissingFallbackRule,
            RuleSetError::UnconditionalRule { .. } => ErrorCode::ValidationFailed,
            RuleSetError::DuplicateArchetype { .. } => ErrorCode::DuplicateEntry,
            RuleSetError::EmptyArchetypeName => ErrorCode::EmptyField,
            RuleSetError::Parse(_) => ErrorCode::InvalidFormat,
        }
    }
}

impl From<RuleSetError> for DomainError {
    fn from(err: RuleSetError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
