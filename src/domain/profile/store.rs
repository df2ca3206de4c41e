//! PreferenceStore - Owned onboarding state: quiz progress plus profile.
//!
//! The store is the single writer of [`UserPreferenceProfile`]. Ranking
//! reads the profile through [`PreferenceStore::profile`]; persistence is
//! the caller's concern and is signalled through the returned values.

use std::collections::BTreeSet;
use std::mem;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, StateMachine};
use crate::domain::personality::{Archetype, PersonalityClassifier};
use crate::domain::quiz::{
    PreferenceVector, QuizError, QuizProgress, QuizSession, SwipeDecision, SwipeOutcome, TraitCard,
    TraitDeck,
};

use super::{OnboardingStatus, ProfileEdit, UserPreferenceProfile};

/// What happened after one swipe.
#[derive(Debug, Clone, PartialEq)]
pub enum SwipeResult {
    /// More cards remain.
    Advanced { progress: QuizProgress },
    /// The deck is finished and the profile was replaced.
    ///
    /// Callers persist `profile`.
    Completed {
        archetype: Archetype,
        profile: UserPreferenceProfile,
    },
}

impl SwipeResult {
    pub fn is_completed(&self) -> bool {
        matches!(self, SwipeResult::Completed { .. })
    }
}

/// Onboarding state machine: Empty, InProgress, Complete.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    status: OnboardingStatus,
    profile: UserPreferenceProfile,
    session: QuizSession,
    classifier: Arc<PersonalityClassifier>,
    staged_project_types: BTreeSet<String>,
}

impl PreferenceStore {
    /// Creates an empty store for first use.
    pub fn new(deck: Arc<TraitDeck>, classifier: Arc<PersonalityClassifier>) -> Self {
        Self {
            status: OnboardingStatus::Empty,
            profile: UserPreferenceProfile::default(),
            session: QuizSession::new(deck),
            classifier,
            staged_project_types: BTreeSet::new(),
        }
    }

    /// Rebuilds a store from a persisted profile.
    ///
    /// A profile with an archetype restores as `Complete`; anything else
    /// restores as `Empty` while keeping the stored fields. Partial quiz
    /// progress is never persisted, so `InProgress` cannot be restored.
    pub fn restore(
        deck: Arc<TraitDeck>,
        classifier: Arc<PersonalityClassifier>,
        profile: UserPreferenceProfile,
    ) -> Self {
        let status = if profile.has_archetype() {
            OnboardingStatus::Complete
        } else {
            OnboardingStatus::Empty
        };
        Self {
            status,
            profile,
            session: QuizSession::new(deck),
            classifier,
            staged_project_types: BTreeSet::new(),
        }
    }

    pub fn status(&self) -> OnboardingStatus {
        self.status
    }

    /// The profile ranking should use right now.
    pub fn profile(&self) -> &UserPreferenceProfile {
        &self.profile
    }

    pub fn progress(&self) -> QuizProgress {
        self.session.progress()
    }

    /// The card awaiting a decision; `None` when the store is complete.
    pub fn current_card(&self) -> Option<&TraitCard> {
        if self.status.accepts_swipes() {
            self.session.current_card()
        } else {
            None
        }
    }

    /// The partial vector while the quiz runs.
    pub fn vector(&self) -> &PreferenceVector {
        self.session.vector()
    }

    pub fn classifier(&self) -> &PersonalityClassifier {
        &self.classifier
    }

    /// The archetype matching the current profile, if any.
    pub fn archetype(&self) -> Option<&Archetype> {
        self.profile
            .archetype_name
            .as_deref()
            .and_then(|name| self.classifier.find_archetype(name))
    }

    pub fn staged_project_types(&self) -> &BTreeSet<String> {
        &self.staged_project_types
    }

    /// Records the project types picked during onboarding.
    ///
    /// They replace any earlier staging and are written to the profile when
    /// the quiz completes.
    pub fn stage_project_types<I, S>(&mut self, types: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.staged_project_types = types.into_iter().map(Into::into).collect();
    }

    /// Applies one decision to the current card.
    ///
    /// The first swipe moves `Empty` to `InProgress`. The swipe that answers
    /// the last card classifies the final vector and replaces the profile in
    /// one step.
    ///
    /// # Errors
    ///
    /// - `QuizAlreadyComplete` if the store is `Complete`
    pub fn record_swipe(&mut self, decision: SwipeDecision) -> Result<SwipeResult, DomainError> {
        if !self.status.accepts_swipes() {
            return Err(QuizError::AlreadyComplete {
                deck_len: self.session.deck().len(),
            }
            .into());
        }

        if self.status == OnboardingStatus::Empty {
            self.status = self.status.transition_to(OnboardingStatus::InProgress)?;
        }

        match self.session.record(decision)? {
            SwipeOutcome::Advanced { .. } => Ok(SwipeResult::Advanced {
                progress: self.session.progress(),
            }),
            SwipeOutcome::Completed => self.complete(),
        }
    }

    fn complete(&mut self) -> Result<SwipeResult, DomainError> {
        let status = self.status.transition_to(OnboardingStatus::Complete)?;
        let archetype = self.classifier.classify(self.session.vector()).clone();

        self.profile = UserPreferenceProfile {
            archetype_name: Some(archetype.name.clone()),
            primary_style_tag: Some(archetype.style_tag()),
            declared_project_types: mem::take(&mut self.staged_project_types),
            onboarding_complete: true,
        };
        self.status = status;

        tracing::info!(
            archetype = %archetype.name,
            style_tag = ?self.profile.primary_style_tag,
            project_types = self.profile.declared_project_types.len(),
            "Onboarding quiz complete"
        );

        Ok(SwipeResult::Completed {
            archetype,
            profile: self.profile.clone(),
        })
    }

    /// Discards quiz progress, staging and the whole profile, returning to
    /// `Empty`.
    ///
    /// From `Empty` there is no status change, but fields restored from an
    /// incomplete persisted profile are still discarded.
    pub fn restart_quiz(&mut self) -> Result<(), DomainError> {
        let previous = self.status;
        if previous != OnboardingStatus::Empty {
            self.status = previous.transition_to(OnboardingStatus::Empty)?;
        }
        self.session.restart();
        self.profile = UserPreferenceProfile::default();
        self.staged_project_types.clear();

        tracing::info!(from = %previous, "Onboarding quiz restarted");
        Ok(())
    }

    /// Applies an out-of-quiz edit and returns the profile to persist.
    pub fn update_profile(&mut self, edit: ProfileEdit) -> UserPreferenceProfile {
        edit.apply_to(&mut self.profile);
        tracing::debug!(
            project_types = self.profile.declared_project_types.len(),
            onboarding_complete = self.profile.onboarding_complete,
            "Profile edited"
        );
        self.profile.clone()
    }
}
