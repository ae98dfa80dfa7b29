// SPDX-License-Identifier: MPL-2.0
//! Deck file loading.
//!
//! Decks are TOML documents. The on-disk layout is kept in private structs so
//! the domain manifests stay free of serialization concerns.
//!
//! ```toml
//! title = "Medieval Europe"
//!
//! [[slides]]
//! kind = "title"
//! heading = "Medieval Europe"
//!
//! [[slides]]
//! heading = "Castles"
//! final_message = "Long live the king!"
//!
//! [[slides.groups]]
//! category = "card"
//! elements = [{ text = "Stone keeps replaced wooden forts", icon = "🏰" }]
//! ```

use super::registry::SlideRegistry;
use crate::domain::deck::{ElementCategory, SlideElement, SlideKind, SlideManifest};
use crate::error::{DeckError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DeckFile {
    #[serde(default)]
    title: String,
    #[serde(default)]
    slides: Vec<SlideSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SlideSpec {
    #[serde(default)]
    kind: SlideKindSpec,
    heading: String,
    #[serde(default)]
    final_message: Option<String>,
    #[serde(default)]
    groups: Vec<GroupSpec>,
}

#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
enum SlideKindSpec {
    Title,
    #[default]
    Content,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GroupSpec {
    category: CategorySpec,
    #[serde(default)]
    elements: Vec<ElementSpec>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum CategorySpec {
    Text,
    Media,
    Card,
    Note,
    Feature,
    Timeline,
    KeyPoint,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ElementSpec {
    text: String,
    #[serde(default)]
    icon: Option<String>,
}

impl From<SlideKindSpec> for SlideKind {
    fn from(kind: SlideKindSpec) -> Self {
        match kind {
            SlideKindSpec::Title => SlideKind::Title,
            SlideKindSpec::Content => SlideKind::Content,
        }
    }
}

impl From<CategorySpec> for ElementCategory {
    fn from(category: CategorySpec) -> Self {
        match category {
            CategorySpec::Text => ElementCategory::Text,
            CategorySpec::Media => ElementCategory::Media,
            CategorySpec::Card => ElementCategory::Card,
            CategorySpec::Note => ElementCategory::Note,
            CategorySpec::Feature => ElementCategory::Feature,
            CategorySpec::Timeline => ElementCategory::Timeline,
            CategorySpec::KeyPoint => ElementCategory::KeyPoint,
        }
    }
}

impl From<SlideSpec> for SlideManifest {
    fn from(spec: SlideSpec) -> Self {
        let mut manifest = SlideManifest::new(spec.heading).with_kind(spec.kind.into());
        for group in spec.groups {
            let elements = group
                .elements
                .into_iter()
                .map(|element| SlideElement {
                    text: element.text,
                    icon: element.icon,
                })
                .collect();
            manifest.push_group(group.category.into(), elements);
        }
        manifest.final_message = spec.final_message;
        manifest
    }
}

/// Parses a deck from TOML text.
pub fn parse_deck(content: &str) -> Result<SlideRegistry> {
    let file: DeckFile =
        toml::from_str(content).map_err(|err| DeckError::Malformed(err.to_string()))?;
    let slides = file.slides.into_iter().map(SlideManifest::from).collect();
    let registry = SlideRegistry::new(file.title, slides)?;
    Ok(registry)
}

/// Reads and parses a deck file.
pub fn load_from_path(path: &Path) -> Result<SlideRegistry> {
    let content = fs::read_to_string(path)?;
    let registry = parse_deck(&content)?;
    tracing::debug!(
        path = %path.display(),
        slides = registry.slide_count(),
        "deck loaded"
    );
    Ok(registry)
}
