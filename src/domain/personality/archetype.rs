//! Archetype value object and its style tag slug.

use serde::{Deserialize, Serialize};

/// A named style personality with its display content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archetype {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl Archetype {
    /// Creates an archetype with only a name; display content can be
    /// filled in with the `with_*` builders.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tagline: String::new(),
            description: String::new(),
            colors: Vec::new(),
            materials: Vec::new(),
            tips: Vec::new(),
        }
    }

    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_materials<I, S>(mut self, materials: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.materials = materials.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tips<I, S>(mut self, tips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tips = tips.into_iter().map(Into::into).collect();
        self
    }

    /// The slug used to join this archetype to style keywords and to
    /// content style labels.
    pub fn style_tag(&self) -> String {
        style_tag_for(&self.name)
    }
}

/// Lower-cases a name and replaces each run of whitespace with a single
/// underscore. Leading and trailing whitespace is dropped.
pub fn style_tag_for(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}
