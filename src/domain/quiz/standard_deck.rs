//! Built-in onboarding deck.

use once_cell::sync::Lazy;
use std::sync::Arc;

use super::{CardKind, TraitCard, TraitDeck, TraitWeight};
use crate::domain::foundation::{CardId, ValidationError};

/// Dimension names the built-in deck and archetype rules share.
pub mod dimensions {
    pub const MODERN: &str = "modern";
    pub const MINIMALISM: &str = "minimalism";
    pub const COLOR_TEMP: &str = "colorTemp";
    pub const NATURAL: &str = "natural";
    pub const BOLD: &str = "bold";
    pub const VINTAGE: &str = "vintage";
    pub const INDUSTRIAL: &str = "industrial";
}

use dimensions::*;

type CardSpec = (
    &'static str,
    CardKind,
    &'static str,
    &'static [(&'static str, i32)],
);

const STANDARD_CARDS: &[CardSpec] = &[
    (
        "clean-lines",
        CardKind::Statement,
        "Clean lines and clear countertops make me feel calm",
        &[(MODERN, 1), (MINIMALISM, 1)],
    ),
    (
        "terracotta-honey",
        CardKind::Color,
        "Terracotta, honey and ochre",
        &[(COLOR_TEMP, 1)],
    ),
    (
        "reclaimed-oak",
        CardKind::Image,
        "A reclaimed oak dining table with visible grain",
        &[(NATURAL, 1), (VINTAGE, 1)],
    ),
    (
        "concrete-or-wood",
        CardKind::EitherOr,
        "Polished concrete floors or wide-plank wood?",
        &[(INDUSTRIAL, 1), (NATURAL, -1)],
    ),
    (
        "collected-story",
        CardKind::Statement,
        "A room should tell a story through pieces collected over time",
        &[(MINIMALISM, -1), (VINTAGE, 1)],
    ),
    (
        "icy-blues",
        CardKind::Color,
        "Icy blues and crisp whites",
        &[(COLOR_TEMP, -1)],
    ),
    (
        "black-fixtures-brick",
        CardKind::Image,
        "Matte black fixtures against exposed brick",
        &[(INDUSTRIAL, 1), (BOLD, 1)],
    ),
    (
        "statement-wall",
        CardKind::Statement,
        "I'd rather have a statement wall than a neutral one",
        &[(BOLD, 1), (MINIMALISM, -1)],
    ),
    (
        "linen-rattan",
        CardKind::Image,
        "Linen, rattan and a corner full of plants",
        &[(NATURAL, 1), (COLOR_TEMP, 1)],
    ),
    (
        "handleless-or-shaker",
        CardKind::EitherOr,
        "Sleek handleless cabinets or detailed shaker doors?",
        &[(MODERN, 1), (VINTAGE, -1)],
    ),
    (
        "jewel-tones",
        CardKind::Color,
        "Emerald, sapphire and ruby",
        &[(BOLD, 1)],
    ),
    (
        "less-is-more",
        CardKind::Statement,
        "Less is more",
        &[(MINIMALISM, 1)],
    ),
];

static STANDARD_DECK: Lazy<Arc<TraitDeck>> = Lazy::new(|| {
    Arc::new(build_standard_deck().expect("Built-in deck must be valid"))
});

/// Returns the built-in twelve-card deck.
pub fn standard_deck() -> Arc<TraitDeck> {
    Arc::clone(&STANDARD_DECK)
}

fn build_standard_deck() -> Result<TraitDeck, ValidationError> {
    let mut cards = Vec::with_capacity(STANDARD_CARDS.len());
    for (id, kind, prompt, traits) in STANDARD_CARDS {
        let weights = traits
            .iter()
            .map(|(dim, w)| TraitWeight::new(*dim, *w))
            .collect::<Result<Vec<_>, _>>()?;
        cards.push(TraitCard::new(CardId::new(*id)?, *kind, *prompt, weights)?);
    }
    TraitDeck::new(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_contains_every_card() {
        assert_eq!(standard_deck().len(), STANDARD_CARDS.len());
    }

    #[test]
    fn standard_deck_is_shared() {
        assert!(Arc::ptr_eq(&standard_deck(), &standard_deck()));
    }

    #[test]
    fn standard_deck_covers_all_dimensions() {
        let deck = standard_deck();
        let dims: HashSet<&str> = deck
            .cards()
            .iter()
            .flat_map(|c| c.traits().iter().map(|t| t.dimension.as_str()))
            .collect();

        for dim in [MODERN, MINIMALISM, COLOR_TEMP, NATURAL, BOLD, VINTAGE, INDUSTRIAL] {
            assert!(dims.contains(dim), "missing dimension {}", dim);
        }
    }

    #[test]
    fn standard_deck_order_is_fixed() {
        let deck = standard_deck();
        assert_eq!(deck.get(0).unwrap().id().as_str(), "clean-lines");
        assert_eq!(deck.get(11).unwrap().id().as_str(), "less-is-more");
    }
}
