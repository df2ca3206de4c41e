//! First-match personality classification.
//!
//! A classifier is an ordered list of rules plus one fallback archetype.
//! The fallback is a separate, non-optional field so classification is
//! total by construction: there is no "no match" outcome.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Archetype, RuleSetError};
use crate::domain::quiz::PreferenceVector;

/// A sign test on one dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Holds when the dimension is strictly positive.
    Leans(String),
    /// Holds when the dimension is zero, negative or untouched.
    DoesNotLean(String),
}

impl Condition {
    /// Evaluates the condition against a vector.
    pub fn holds(&self, vector: &PreferenceVector) -> bool {
        match self {
            Condition::Leans(dim) => vector.leans(dim),
            Condition::DoesNotLean(dim) => !vector.leans(dim),
        }
    }
}

/// A conjunction of conditions mapping to one archetype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRule {
    archetype: Archetype,
    conditions: Vec<Condition>,
}

impl ClassificationRule {
    /// Creates a rule.
    ///
    /// # Errors
    ///
    /// - `UnconditionalRule` if `conditions` is empty
    /// - `EmptyArchetypeName` if the archetype has a blank name
    pub fn new(archetype: Archetype, conditions: Vec<Condition>) -> Result<Self, RuleSetError> {
        if archetype.name.trim().is_empty() {
            return Err(RuleSetError::EmptyArchetypeName);
        }
        if conditions.is_empty() {
            return Err(RuleSetError::UnconditionalRule {
                archetype: archetype.name,
            });
        }
        Ok(Self {
            archetype,
            conditions,
        })
    }

    /// True when every condition holds.
    pub fn matches(&self, vector: &PreferenceVector) -> bool {
        self.conditions.iter().all(|c| c.holds(vector))
    }

    pub fn archetype(&self) -> &Archetype {
        &self.archetype
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}

/// Ordered rule list with a mandatory trailing fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalityClassifier {
    rules: Vec<ClassificationRule>,
    fallback: Archetype,
}

impl PersonalityClassifier {
    /// Creates a classifier. Rules are evaluated in the given order; the
    /// fallback is evaluated last and always matches.
    ///
    /// # Errors
    ///
    /// - `DuplicateArchetype` if two archetypes share a style tag
    /// - `EmptyArchetypeName` if the fallback has a blank name
    pub fn new(rules: Vec<ClassificationRule>, fallback: Archetype) -> Result<Self, RuleSetError> {
        if fallback.name.trim().is_empty() {
            return Err(RuleSetError::EmptyArchetypeName);
        }

        let mut seen = HashSet::new();
        let tags = rules
            .iter()
            .map(|r| r.archetype.style_tag())
            .chain(std::iter::once(fallback.style_tag()));
        for tag in tags {
            if !seen.insert(tag.clone()) {
                return Err(RuleSetError::DuplicateArchetype { style_tag: tag });
            }
        }

        Ok(Self { rules, fallback })
    }

    /// Parses and validates a rule set from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, RuleSetError> {
        let definition: RuleSetDefinition =
            serde_yaml::from_str(yaml).map_err(|e| RuleSetError::Parse(e.to_string()))?;
        Self::try_from(definition)
    }

    /// Maps a vector to exactly one archetype.
    ///
    /// The first rule, in declaration order, whose conditions all hold
    /// wins. If none do, the fallback is returned.
    pub fn classify(&self, vector: &PreferenceVector) -> &Archetype {
        self.matching_rule(vector)
            .map(|i| &self.rules[i].archetype)
            .unwrap_or(&self.fallback)
    }

    /// Index of the first matching rule, `None` when the fallback applies.
    pub fn matching_rule(&self, vector: &PreferenceVector) -> Option<usize> {
        self.rules.iter().position(|r| r.matches(vector))
    }

    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &Archetype {
        &self.fallback
    }

    /// All archetypes in evaluation order, fallback last.
    pub fn archetypes(&self) -> impl Iterator<Item = &Archetype> {
        self.rules
            .iter()
            .map(|r| &r.archetype)
            .chain(std::iter::once(&self.fallback))
    }

    /// Looks up an archetype by display name.
    pub fn find_archetype(&self, name: &str) -> Option<&Archetype> {
        self.archetypes().find(|a| a.name == name)
    }
}

/// Serialized rule: the archetype plus the dimensions it requires to be
/// positive and the dimensions it requires not to be.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub archetype: Archetype,
    #[serde(default)]
    pub leans: Vec<String>,
    #[serde(default)]
    pub does_not_lean: Vec<String>,
}

/// Serialized rule set as loaded from configuration. The fallback is
/// optional here only so that its absence can be reported as a
/// configuration error instead of a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSetDefinition {
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
    pub fallback: Option<Archetype>,
}

impl TryFrom<RuleSetDefinition> for PersonalityClassifier {
    type Error = RuleSetError;

    fn try_from(def: RuleSetDefinition) -> Result<Self, Self::Error> {
        let fallback = def.fallback.ok_or(RuleSetError::MissingFallback)?;

        let rules = def
            .rules
            .into_iter()
            .map(|r| {
                let conditions = r
                    .leans
                    .into_iter()
                    .map(Condition::Leans)
                    .chain(r.does_not_lean.into_iter().map(Condition::DoesNotLean))
                    .collect();
                ClassificationRule::new(r.archetype, conditions)
            })
            .collect::<Result<Vec<_>, _>>()?;

        PersonalityClassifier::new(rules, fallback)
    }
}
