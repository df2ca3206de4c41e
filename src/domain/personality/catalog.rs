//! Built-in archetype catalog and classification rules.

use once_cell::sync::Lazy;
use std::sync::Arc;

use super::{Archetype, ClassificationRule, Condition, PersonalityClassifier, RuleSetError};
use crate::domain::quiz::dimensions::*;

static STANDARD_CLASSIFIER: Lazy<Arc<PersonalityClassifier>> = Lazy::new(|| {
    Arc::new(build_standard_classifier().expect("Built-in rule set must be valid"))
});

/// Returns the built-in classifier: six conditional archetypes followed
/// by the "Eclectic Creative" fallback.
pub fn standard_classifier() -> Arc<PersonalityClassifier> {
    Arc::clone(&STANDARD_CLASSIFIER)
}

fn leans(dim: &str) -> Condition {
    Condition::Leans(dim.to_string())
}

fn does_not_lean(dim: &str) -> Condition {
    Condition::DoesNotLean(dim.to_string())
}

fn build_standard_classifier() -> Result<PersonalityClassifier, RuleSetError> {
    let rules = vec![
        ClassificationRule::new(
            Archetype::named("Modern Minimalist")
                .with_tagline("Calm, clean and intentional")
                .with_description(
                    "You edit ruthlessly and let form do the talking. Flat-front \
                     cabinetry, hidden storage and a restrained palette keep \
                     your spaces quiet.",
                )
                .with_colors(["Warm white", "Greige", "Charcoal", "Black accents"])
                .with_materials(["Quartz", "Lacquered MDF", "Brushed steel", "Large-format tile"])
                .with_tips([
                    "Choose handleless or integrated pulls to keep lines unbroken",
                    "Hide small appliances in an appliance garage",
                    "Limit each room to three finishes",
                ]),
            vec![leans(MODERN), leans(MINIMALISM)],
        )?,
        ClassificationRule::new(
            Archetype::named("Warm Naturalist")
                .with_tagline("Grounded, organic and sunlit")
                .with_description(
                    "You gravitate to materials that look grown rather than made. \
                     Wood grain, stone and woven textures in sun-warmed tones \
                     make a house feel lived in.",
                )
                .with_colors(["Terracotta", "Sage", "Oatmeal", "Honey"])
                .with_materials(["White oak", "Travertine", "Rattan", "Linen"])
                .with_tips([
                    "Pick oiled rather than lacquered wood finishes",
                    "Layer textures in the same tone family",
                    "Bring in plants as part of the design, not an afterthought",
                ]),
            vec![leans(COLOR_TEMP), leans(NATURAL)],
        )?,
        ClassificationRule::new(
            Archetype::named("Industrial Loft")
                .with_tagline("Raw, honest and urban")
                .with_description(
                    "You like seeing how things are built. Exposed structure, \
                     metal and concrete give your spaces an edge.",
                )
                .with_colors(["Graphite", "Rust", "Concrete grey", "Black"])
                .with_materials(["Polished concrete", "Blackened steel", "Exposed brick", "Reclaimed timber"])
                .with_tips([
                    "Leave ductwork and beams visible where you can",
                    "Use matte black fixtures throughout for consistency",
                    "Warm the space with leather and timber accents",
                ]),
            vec![leans(INDUSTRIAL), does_not_lean(NATURAL)],
        )?,
        ClassificationRule::new(
            Archetype::named("Timeless Classic")
                .with_tagline("Heritage details, lasting comfort")
                .with_description(
                    "You value craftsmanship and details that have stood the test \
                     of time: mouldings, panelled doors and furniture with a history.",
                )
                .with_colors(["Navy", "Cream", "Forest green", "Brass"])
                .with_materials(["Marble", "Painted shaker doors", "Unlacquered brass", "Herringbone oak"])
                .with_tips([
                    "Invest in crown moulding and wainscoting",
                    "Mix one antique piece into each room",
                    "Choose finishes that patina rather than wear",
                ]),
            vec![leans(VINTAGE), does_not_lean(MODERN)],
        )?,
        ClassificationRule::new(
            Archetype::named("Bold Maximalist")
                .with_tagline("More colour, more pattern, more you")
                .with_description(
                    "You treat every wall as an opportunity. Saturated colour, \
                     pattern on pattern and statement pieces make your home \
                     unmistakably yours.",
                )
                .with_colors(["Emerald", "Sapphire", "Ruby", "Mustard"])
                .with_materials(["Velvet", "Patterned cement tile", "Lacquer", "Wallpaper"])
                .with_tips([
                    "Anchor bold colour with one repeated accent",
                    "Try a patterned ceiling in a small room",
                    "Curate collections on open shelving",
                ]),
            vec![leans(BOLD), does_not_lean(MINIMALISM)],
        )?,
        ClassificationRule::new(
            Archetype::named("Coastal Calm")
                .with_tagline("Breezy, light and easygoing")
                .with_description(
                    "You want rooms that feel like a deep breath. Cool tones, \
                     natural fibres and plenty of light keep things relaxed.",
                )
                .with_colors(["Sea glass", "Sand", "Crisp white", "Driftwood grey"])
                .with_materials(["Whitewashed oak", "Jute", "Shiplap", "Zellige tile"])
                .with_tips([
                    "Keep window treatments sheer to maximise light",
                    "Use blue-green glass tile in wet areas",
                    "Choose performance fabrics in pale colours",
                ]),
            vec![leans(NATURAL), does_not_lean(COLOR_TEMP)],
        )?,
    ];

    let fallback = Archetype::named("Eclectic Creative")
        .with_tagline("Rules are suggestions")
        .with_description(
            "Your taste doesn't sit in one box, and that's a strength. You mix \
             eras, colours and materials by instinct.",
        )
        .with_colors(["Ochre", "Teal", "Blush", "Ink"])
        .with_materials(["Mixed metals", "Vintage rugs", "Hand-painted tile", "Rattan"])
        .with_tips([
            "Repeat a colour three times across a room to tie it together",
            "Mix old and new in every room",
            "Let one wild piece lead and keep the rest supporting",
        ]);

    PersonalityClassifier::new(rules, fallback)
}
