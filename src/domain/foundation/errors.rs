//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
///
/// These are configuration errors: they surface while a deck, rule set or
/// keyword table is being built, never while a user is swiping or ranking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has duplicate value '{value}'")]
    Duplicate { field: String, value: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a duplicate value validation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation / configuration errors
    ValidationFailed,
    EmptyField,
    InvalidFormat,
    DuplicateEntry,
    MissingFallbackRule,

    // Sequencing errors
    InvalidStateTransition,
    QuizAlreadyComplete,

    // Not found errors
    ProfileNotFound,

    // Infrastructure errors
    StorageError,
    ContentSourceError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::DuplicateEntry => "DUPLICATE_ENTRY",
            ErrorCode::MissingFallbackRule => "MISSING_FALLBACK_RULE",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::QuizAlreadyComplete => "QUIZ_ALREADY_COMPLETE",
            ErrorCode::ProfileNotFound => "PROFILE_NOT_FOUND",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::ContentSourceError => "CONTENT_SOURCE_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match &err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::Duplicate { .. } => ErrorCode::DuplicateEntry,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        };
        let field = match &err {
            ValidationError::EmptyField { field }
            | ValidationError::Duplicate { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field.clone(),
        };
        DomainError::new(code, err.to_string()).with_detail("field", field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_card_id_becomes_duplicate_entry_with_field() {
        let err: DomainError = ValidationError::duplicate("card_id", "warm-or-cool").into();

        assert_eq!(err.code, ErrorCode::DuplicateEntry);
        assert_eq!(err.details.get("field").map(String::as_str), Some("card_id"));
        assert_eq!(
            err.to_string(),
            "[DUPLICATE_ENTRY] Field 'card_id' has duplicate value 'warm-or-cool'"
        );
    }

    #[test]
    fn each_validation_kind_has_its_own_code() {
        let cases = [
            (ValidationError::empty_field("traits"), ErrorCode::EmptyField),
            (
                ValidationError::invalid_format("deck", "expected a sequence"),
                ErrorCode::InvalidFormat,
            ),
        ];
        for (validation, code) in cases {
            assert_eq!(DomainError::from(validation).code, code);
        }
    }

    #[test]
    fn sequencing_code_renders_screaming_snake() {
        let err = DomainError::new(ErrorCode::QuizAlreadyComplete, "deck exhausted")
            .with_detail("deck_len", "12");
        assert_eq!(err.to_string(), "[QUIZ_ALREADY_COMPLETE] deck exhausted");
        assert_eq!(ErrorCode::ContentSourceError.to_string(), "CONTENT_SOURCE_ERROR");
    }
}
