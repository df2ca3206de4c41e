//! OnboardingStatus enum for tracking the preference store lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle of the preference store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStatus {
    /// No decisions recorded, no archetype.
    #[default]
    Empty,
    /// At least one decision recorded, deck not finished.
    InProgress,
    /// Deck finished and profile written.
    Complete,
}

impl OnboardingStatus {
    /// Returns true if swipes are accepted in this status.
    pub fn accepts_swipes(&self) -> bool {
        !matches!(self, OnboardingStatus::Complete)
    }
}

impl StateMachine for OnboardingStatus {
    /// Valid transitions:
    /// - Empty -> InProgress (first swipe)
    /// - InProgress -> Complete (last swipe)
    /// - InProgress -> Empty, Complete -> Empty (restart)
    fn can_transition_to(&self, target: &Self) -> bool {
        use OnboardingStatus::*;
        matches!(
            (self, target),
            (Empty, InProgress) | (InProgress, Complete) | (InProgress, Empty) | (Complete, Empty)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use OnboardingStatus::*;
        match self {
            Empty => vec![InProgress],
            InProgress => vec![Complete, Empty],
            Complete => vec![Empty],
        }
    }
}

impl fmt::Display for OnboardingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OnboardingStatus::Empty => "Empty",
            OnboardingStatus::InProgress => "InProgress",
            OnboardingStatus::Complete => "Complete",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn default_is_empty() {
        assert_eq!(OnboardingStatus::default(), OnboardingStatus::Empty);
    }

    #[test]
    fn forward_path_is_valid() {
        let s = OnboardingStatus::Empty
            .transition_to(OnboardingStatus::InProgress)
            .unwrap()
            .transition_to(OnboardingStatus::Complete)
            .unwrap();
        assert_eq!(s, OnboardingStatus::Complete);
    }

    #[test]
    fn restart_returns_to_empty() {
        assert!(OnboardingStatus::InProgress.can_transition_to(&OnboardingStatus::Empty));
        assert!(OnboardingStatus::Complete.can_transition_to(&OnboardingStatus::Empty));
    }

    #[test]
    fn empty_cannot_skip_to_complete() {
        let err = OnboardingStatus::Empty
            .transition_to(OnboardingStatus::Complete)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn complete_cannot_resume() {
        assert!(!OnboardingStatus::Complete.can_transition_to(&OnboardingStatus::InProgress));
        assert!(!OnboardingStatus::Complete.accepts_swipes());
    }

    #[test]
    fn no_status_is_terminal() {
        for s in [
            OnboardingStatus::Empty,
            OnboardingStatus::InProgress,
            OnboardingStatus::Complete,
        ] {
            assert!(!s.is_terminal());
            for t in s.valid_transitions() {
                assert!(s.can_transition_to(&t));
            }
        }
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&OnboardingStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
    }

    #[test]
    fn display_works_correctly() {
        assert_eq!(OnboardingStatus::Complete.to_string(), "Complete");
    }
}
