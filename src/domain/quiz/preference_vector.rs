//! Accumulated taste dimensions and the pure swipe fold.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::TraitCard;

/// A single binary swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDecision {
    Accept,
    Reject,
}

impl SwipeDecision {
    /// Multiplier applied to each trait weight.
    pub fn sign(&self) -> f64 {
        match self {
            SwipeDecision::Accept => 1.0,
            SwipeDecision::Reject => -1.0,
        }
    }
}

impl From<bool> for SwipeDecision {
    fn from(accepted: bool) -> Self {
        if accepted {
            SwipeDecision::Accept
        } else {
            SwipeDecision::Reject
        }
    }
}

/// Mapping from dimension name to accumulated signed value.
///
/// Untouched dimensions read as 0. Keys appear lazily, the first time a
/// swiped card references them, and stay even if they later sum back to 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceVector {
    values: BTreeMap<String, f64>,
}

impl PreferenceVector {
    /// Creates an empty vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the accumulated value of a dimension, 0 if never touched.
    pub fn get(&self, dimension: &str) -> f64 {
        self.values.get(dimension).copied().unwrap_or(0.0)
    }

    /// True only when the dimension is strictly positive.
    ///
    /// Zero (including never touched) is indifference, not evidence of
    /// either pole.
    pub fn leans(&self, dimension: &str) -> bool {
        self.get(dimension) > 0.0
    }

    /// Returns true if a card referencing this dimension has been swiped.
    pub fn contains(&self, dimension: &str) -> bool {
        self.values.contains_key(dimension)
    }

    /// Returns true if no dimension has been touched.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of touched dimensions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterates dimensions in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Returns up to `n` dimensions with the largest absolute leaning,
    /// strongest first. Ties keep name order; zero-valued dimensions are
    /// skipped.
    pub fn strongest(&self, n: usize) -> Vec<(&str, f64)> {
        let mut leaning: Vec<(&str, f64)> = self.iter().filter(|(_, v)| *v != 0.0).collect();
        leaning.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()));
        leaning.truncate(n);
        leaning
    }

    /// Folds one card's decision into this vector in place.
    pub(crate) fn fold_decision(&mut self, card: &TraitCard, decision: SwipeDecision) {
        for t in card.traits() {
            let delta = decision.sign() * f64::from(t.weight);
            *self.values.entry(t.dimension.clone()).or_insert(0.0) += delta;
        }
    }
}

impl FromIterator<(String, f64)> for PreferenceVector {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Applies one swipe to a vector, returning the new vector.
///
/// For each `(dimension, weight)` on the card the result holds
/// `old + weight` when accepted and `old - weight` when rejected. The
/// input is left untouched.
pub fn apply_decision(
    vector: &PreferenceVector,
    card: &TraitCard,
    decision: SwipeDecision,
) -> PreferenceVector {
    let mut next = vector.clone();
    next.fold_decision(card, decision);
    next
}
