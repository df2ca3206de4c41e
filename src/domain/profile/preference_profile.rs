//! The durable user preference record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What ranking reads and persistence stores.
///
/// Written as a whole at quiz completion; never merged with a previous run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferenceProfile {
    #[serde(default)]
    pub archetype_name: Option<String>,
    #[serde(default)]
    pub primary_style_tag: Option<String>,
    #[serde(default)]
    pub declared_project_types: BTreeSet<String>,
    #[serde(default)]
    pub onboarding_complete: bool,
}

impl UserPreferenceProfile {
    /// True once the quiz has produced an archetype.
    pub fn has_archetype(&self) -> bool {
        self.archetype_name.is_some()
    }
}

/// An edit made outside the quiz, e.g. from a settings screen.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEdit {
    #[serde(default)]
    pub declared_project_types: Option<BTreeSet<String>>,
    #[serde(default)]
    pub onboarding_complete: Option<bool>,
}

impl ProfileEdit {
    pub fn project_types<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            declared_project_types: Some(types.into_iter().map(Into::into).collect()),
            onboarding_complete: None,
        }
    }

    pub fn with_onboarding_complete(mut self, complete: bool) -> Self {
        self.onboarding_complete = Some(complete);
        self
    }

    /// True if the edit changes nothing.
    pub fn is_empty(&self) -> bool {
        self.declared_project_types.is_none() && self.onboarding_complete.is_none()
    }

    pub(crate) fn apply_to(self, profile: &mut UserPreferenceProfile) {
        if let Some(types) = self.declared_project_types {
            profile.declared_project_types = types;
        }
        if let Some(complete) = self.onboarding_complete {
            profile.onboarding_complete = complete;
        }
    }
}
