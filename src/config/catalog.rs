//! Quiz and ranking content configuration
//!
//! Every path is optional; when unset the built-in content is used.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::error::{ConfigError, ValidationError};
use crate::domain::personality::{standard_classifier, PersonalityClassifier};
use crate::domain::quiz::{standard_deck, TraitDeck};
use crate::domain::ranking::{standard_style_keywords, StyleKeywordTable};

/// Optional YAML overrides for the deck, rule set and keyword table
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogConfig {
    /// Trait card deck (list of cards)
    #[serde(default)]
    pub deck_path: Option<PathBuf>,

    /// Classification rules with their fallback archetype
    #[serde(default)]
    pub rules_path: Option<PathBuf>,

    /// Style tag to keyword list mapping
    #[serde(default)]
    pub style_keywords_path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Validate that configured override files exist
    pub fn validate(&self) -> Result<(), ValidationError> {
        for path in [&self.deck_path, &self.rules_path, &self.style_keywords_path]
            .into_iter()
            .flatten()
        {
            if !path.exists() {
                return Err(ValidationError::CatalogFileMissing(path.clone()));
            }
        }
        Ok(())
    }

    /// Load the deck override, or the built-in deck
    pub fn load_deck(&self) -> Result<Arc<TraitDeck>, ConfigError> {
        match &self.deck_path {
            Some(path) => {
                let deck = TraitDeck::from_yaml(&read(path)?).map_err(|e| invalid(path, e))?;
                tracing::info!(path = %path.display(), cards = deck.len(), "Loaded deck override");
                Ok(Arc::new(deck))
            }
            None => Ok(standard_deck()),
        }
    }

    /// Load the rule set override, or the built-in classifier
    pub fn load_classifier(&self) -> Result<Arc<PersonalityClassifier>, ConfigError> {
        match &self.rules_path {
            Some(path) => {
                let classifier =
                    PersonalityClassifier::from_yaml(&read(path)?).map_err(|e| invalid(path, e))?;
                tracing::info!(
                    path = %path.display(),
                    rules = classifier.rules().len(),
                    "Loaded rule set override"
                );
                Ok(Arc::new(classifier))
            }
            None => Ok(standard_classifier()),
        }
    }

    /// Load the keyword table override, or the built-in table
    pub fn load_style_keywords(&self) -> Result<Arc<StyleKeywordTable>, ConfigError> {
        match &self.style_keywords_path {
            Some(path) => {
                let table =
                    StyleKeywordTable::from_yaml(&read(path)?).map_err(|e| invalid(path, e))?;
                tracing::info!(path = %path.display(), styles = table.len(), "Loaded style keyword override");
                Ok(Arc::new(table))
            }
            None => Ok(standard_style_keywords()),
        }
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::CatalogUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

fn invalid(path: &Path, err: impl std::fmt::Display) -> ConfigError {
    ConfigError::CatalogInvalid {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn unset_paths_use_built_in_content() {
        let config = CatalogConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.load_deck().unwrap().len(), standard_deck().len());
        assert_eq!(
            config.load_classifier().unwrap().fallback().name,
            standard_classifier().fallback().name
        );
        assert!(!config.load_style_keywords().unwrap().is_empty());
    }

    #[test]
    fn missing_override_fails_validation() {
        let config = CatalogConfig {
            deck_path: Some(PathBuf::from("/definitely/not/here.yaml")),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::CatalogFileMissing(_))
        ));
        assert!(matches!(
            config.load_deck(),
            Err(ConfigError::CatalogUnreadable { .. })
        ));
    }

    #[test]
    fn loads_deck_override() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "deck.yaml",
            r#"
- id: only-card
  kind: statement
  prompt: "Bare brick walls feel like home"
  traits:
    - dimension: industrial
      weight: 1
"#,
        );
        let config = CatalogConfig {
            deck_path: Some(path),
            ..Default::default()
        };

        let deck = config.load_deck().unwrap();
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.cards()[0].id().as_str(), "only-card");
    }

    #[test]
    fn empty_deck_override_is_invalid() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "deck.yaml", "[]\n");
        let config = CatalogConfig {
            deck_path: Some(path),
            ..Default::default()
        };
        assert!(matches!(
            config.load_deck(),
            Err(ConfigError::CatalogInvalid { .. })
        ));
    }

    #[test]
    fn rules_override_without_fallback_is_invalid() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "rules.yaml",
            r#"
rules:
  - archetype:
      name: Modernist
    leans: [modern]
"#,
        );
        let config = CatalogConfig {
            rules_path: Some(path),
            ..Default::default()
        };
        assert!(matches!(
            config.load_classifier(),
            Err(ConfigError::CatalogInvalid { .. })
        ));
    }

    #[test]
    fn loads_keyword_override() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "keywords.yaml", "modernist: [Modern, sleek]\n");
        let config = CatalogConfig {
            style_keywords_path: Some(path),
            ..Default::default()
        };

        let table = config.load_style_keywords().unwrap();
        assert_eq!(table.keywords_for("modernist"), &["modern".to_string(), "sleek".to_string()]);
    }
}
