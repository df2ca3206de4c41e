//! Trait cards and the fixed-order deck they are presented in.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{CardId, ValidationError};

/// How a card is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// A short statement the user agrees or disagrees with.
    Statement,
    /// A photo of a room, finish or object.
    Image,
    /// A colour swatch or palette.
    Color,
    /// A choice between two options; accepting picks the first.
    EitherOr,
}

/// One signed contribution of a card to a named taste dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitWeight {
    pub dimension: String,
    pub weight: i32,
}

impl TraitWeight {
    /// Creates a trait weight, rejecting blank dimension names.
    pub fn new(dimension: impl Into<String>, weight: i32) -> Result<Self, ValidationError> {
        let dimension = dimension.into();
        if dimension.trim().is_empty() {
            return Err(ValidationError::empty_field("dimension"));
        }
        Ok(Self { dimension, weight })
    }
}

/// Serialized form of a card, validated on conversion.
#[derive(Debug, Clone, Deserialize)]
struct TraitCardDefinition {
    id: CardId,
    kind: CardKind,
    #[serde(default)]
    prompt: String,
    traits: Vec<TraitWeight>,
}

/// An immutable swipeable card.
///
/// # Invariants
///
/// - `traits` holds at least one entry
/// - every trait names a non-blank dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TraitCardDefinition")]
pub struct TraitCard {
    id: CardId,
    kind: CardKind,
    prompt: String,
    traits: Vec<TraitWeight>,
}

impl TraitCard {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if `traits` is empty
    pub fn new(
        id: CardId,
        kind: CardKind,
        prompt: impl Into<String>,
        traits: Vec<TraitWeight>,
    ) -> Result<Self, ValidationError> {
        if traits.is_empty() {
            return Err(ValidationError::invalid_format(
                "traits",
                format!("card '{}' must tag at least one dimension", id),
            ));
        }
        Ok(Self {
            id,
            kind,
            prompt: prompt.into(),
            traits,
        })
    }

    /// Returns the card ID.
    pub fn id(&self) -> &CardId {
        &self.id
    }

    /// Returns how the card is presented.
    pub fn kind(&self) -> CardKind {
        self.kind
    }

    /// Returns the display prompt. Never read by scoring.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the dimension weights in declaration order.
    pub fn traits(&self) -> &[TraitWeight] {
        &self.traits
    }
}

impl TryFrom<TraitCardDefinition> for TraitCard {
    type Error = ValidationError;

    fn try_from(def: TraitCardDefinition) -> Result<Self, Self::Error> {
        for t in &def.traits {
            if t.dimension.trim().is_empty() {
                return Err(ValidationError::empty_field("dimension"));
            }
        }
        TraitCard::new(def.id, def.kind, def.prompt, def.traits)
    }
}

/// Ordered, finite sequence of cards. Order is presentation order and is
/// never shuffled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TraitCard>", into = "Vec<TraitCard>")]
pub struct TraitDeck {
    cards: Vec<TraitCard>,
}

impl TraitDeck {
    /// Creates a deck from cards in presentation order.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if there are no cards
    /// - `Duplicate` if two cards share an id
    pub fn new(cards: Vec<TraitCard>) -> Result<Self, ValidationError> {
        if cards.is_empty() {
            return Err(ValidationError::empty_field("cards"));
        }

        let mut seen = HashSet::new();
        for card in &cards {
            if !seen.insert(card.id().as_str()) {
                return Err(ValidationError::duplicate("card_id", card.id().as_str()));
            }
        }

        Ok(Self { cards })
    }

    /// Parses and validates a deck from a YAML list of cards.
    pub fn from_yaml(yaml: &str) -> Result<Self, ValidationError> {
        serde_yaml::from_str(yaml).map_err(|e| ValidationError::invalid_format("deck", e.to_string()))
    }

    /// Returns the number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a validated deck; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the card at a presentation index.
    pub fn get(&self, index: usize) -> Option<&TraitCard> {
        self.cards.get(index)
    }

    /// Returns all cards in presentation order.
    pub fn cards(&self) -> &[TraitCard] {
        &self.cards
    }
}

impl TryFrom<Vec<TraitCard>> for TraitDeck {
    type Error = ValidationError;

    fn try_from(cards: Vec<TraitCard>) -> Result<Self, Self::Error> {
        Self::new(cards)
    }
}

impl From<TraitDeck> for Vec<TraitCard> {
    fn from(deck: TraitDeck) -> Self {
        deck.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, traits: &[(&str, i32)]) -> Result<TraitCard, ValidationError> {
        TraitCard::new(
            CardId::new(id).unwrap(),
            CardKind::Statement,
            "",
            traits
                .iter()
                .map(|(d, w)| TraitWeight::new(*d, *w).unwrap())
                .collect(),
        )
    }

    #[test]
    fn card_without_traits_is_rejected() {
        let result = card("empty", &[]);
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn trait_weight_rejects_blank_dimension() {
        assert!(TraitWeight::new(" ", 1).is_err());
    }

    #[test]
    fn deck_preserves_presentation_order() {
        let deck = TraitDeck::new(vec![
            card("c1", &[("modern", 1)]).unwrap(),
            card("c2", &[("natural", 1)]).unwrap(),
            card("c3", &[("bold", -1)]).unwrap(),
        ])
        .unwrap();

        let ids: Vec<&str> = deck.cards().iter().map(|c| c.id().as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2", "c3"]);
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn deck_rejects_duplicate_ids() {
        let result = TraitDeck::new(vec![
            card("same", &[("modern", 1)]).unwrap(),
            card("same", &[("natural", 1)]).unwrap(),
        ]);
        assert_eq!(result, Err(ValidationError::duplicate("card_id", "same")));
    }

    #[test]
    fn deck_rejects_empty_card_list() {
        assert_eq!(
            TraitDeck::new(vec![]),
            Err(ValidationError::empty_field("cards"))
        );
    }

    #[test]
    fn deck_loads_from_yaml() {
        let yaml = r#"
- id: clean-lines
  kind: statement
  prompt: Clean lines calm me down
  traits:
    - { dimension: modern, weight: 1 }
    - { dimension: minimalism, weight: 1 }
- id: terracotta
  kind: color
  traits:
    - { dimension: colorTemp, weight: 1 }
"#;
        let deck = TraitDeck::from_yaml(yaml).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.get(0).unwrap().traits().len(), 2);
        assert_eq!(deck.get(1).unwrap().kind(), CardKind::Color);
    }

    #[test]
    fn yaml_card_with_empty_traits_fails_at_load() {
        let yaml = r#"
- id: broken
  kind: image
  traits: []
"#;
        assert!(TraitDeck::from_yaml(yaml).is_err());
    }

    #[test]
    fn yaml_deck_with_duplicate_ids_fails_at_load() {
        let yaml = r#"
- id: twin
  kind: image
  traits: [{ dimension: bold, weight: 1 }]
- id: twin
  kind: color
  traits: [{ dimension: bold, weight: -1 }]
"#;
        assert!(TraitDeck::from_yaml(yaml).is_err());
    }
}
