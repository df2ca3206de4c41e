//! Archetype style tag to content keyword lookup.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::foundation::ValidationError;

/// Static mapping from archetype style tag to lowercase keywords.
///
/// Keywords are lower-cased on construction so lookups compare against
/// lower-cased content tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<String, Vec<String>>")]
pub struct StyleKeywordTable {
    entries: HashMap<String, Vec<String>>,
}

impl StyleKeywordTable {
    /// Builds a table from `(style_tag, keywords)` pairs.
    pub fn new<I, K, V, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|(tag, words)| {
                let words = words
                    .into_iter()
                    .map(|w| w.as_ref().trim().to_lowercase())
                    .filter(|w| !w.is_empty())
                    .collect();
                (tag.into(), words)
            })
            .collect();
        Self { entries }
    }

    /// Parses a table from a YAML mapping of style tag to keyword list.
    pub fn from_yaml(yaml: &str) -> Result<Self, ValidationError> {
        serde_yaml::from_str(yaml)
            .map_err(|e| ValidationError::invalid_format("style_keywords", e.to_string()))
    }

    /// Keywords for a style tag; empty for unknown tags.
    pub fn keywords_for(&self, style_tag: &str) -> &[String] {
        self.entries
            .get(style_tag)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of style tags with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, Vec<String>>> for StyleKeywordTable {
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        Self::new(map)
    }
}

static STANDARD_KEYWORDS: Lazy<Arc<StyleKeywordTable>> = Lazy::new(|| {
    Arc::new(StyleKeywordTable::new([
        (
            "modern_minimalist",
            vec!["modern", "minimalist", "minimal", "sleek", "contemporary", "handleless", "monochrome"],
        ),
        (
            "warm_naturalist",
            vec!["natural", "wood", "oak", "organic", "earthy", "terracotta", "rattan", "linen"],
        ),
        (
            "industrial_loft",
            vec!["industrial", "concrete", "brick", "steel", "loft", "metal", "matte black"],
        ),
        (
            "timeless_classic",
            vec!["classic", "traditional", "shaker", "marble", "brass", "heritage", "vintage"],
        ),
        (
            "bold_maximalist",
            vec!["bold", "maximalist", "colorful", "pattern", "velvet", "wallpaper", "jewel tones"],
        ),
        (
            "coastal_calm",
            vec!["coastal", "beach", "airy", "shiplap", "blue", "light", "jute"],
        ),
        (
            "eclectic_creative",
            vec!["eclectic", "boho", "mixed", "vintage", "artistic", "global", "colorful"],
        ),
    ]))
});

/// Returns the built-in keyword table, keyed by the standard archetypes'
/// style tags.
pub fn standard_style_keywords() -> Arc<StyleKeywordTable> {
    Arc::clone(&STANDARD_KEYWORDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::personality::standard_classifier;

    #[test]
    fn unknown_tag_has_no_keywords() {
        let table = StyleKeywordTable::new([("modernist", vec!["modern"])]);
        assert!(table.keywords_for("naturalist").is_empty());
        assert_eq!(table.keywords_for("modernist"), &["modern".to_string()]);
    }

    #[test]
    fn keywords_are_lowercased_and_trimmed() {
        let table = StyleKeywordTable::new([("x", vec![" Oak ", "BRASS", ""])]);
        assert_eq!(table.keywords_for("x"), &["oak".to_string(), "brass".to_string()]);
    }

    #[test]
    fn loads_from_yaml() {
        let table = StyleKeywordTable::from_yaml("modernist: [Modern, Sleek]\n").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.keywords_for("modernist"),
            &["modern".to_string(), "sleek".to_string()]
        );
    }

    #[test]
    fn rejects_malformed_yaml() {
        assert!(StyleKeywordTable::from_yaml("- just\n- a list\n").is_err());
    }

    #[test]
    fn every_standard_archetype_has_keywords() {
        let table = standard_style_keywords();
        for archetype in standard_classifier().archetypes() {
            assert!(
                !table.keywords_for(&archetype.style_tag()).is_empty(),
                "no keywords for {}",
                archetype.style_tag()
            );
        }
    }
}
