// SPDX-License-Identifier: MPL-2.0
//! Slide registry: the fixed, ordered set of slides of a deck.
//!
//! A slide's identity is its 0-based ordinal. The registry is built once at
//! startup and never changes afterwards; the controller only reads it.

use crate::domain::deck::SlideManifest;
use crate::error::DeckError;

/// Ordered, immutable collection of slide manifests.
///
/// Never empty: construction fails with [`DeckError::Empty`] when no slides
/// are given.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideRegistry {
    title: String,
    slides: Vec<SlideManifest>,
}

impl SlideRegistry {
    /// Creates a registry from an ordered list of slides.
    pub fn new(title: impl Into<String>, slides: Vec<SlideManifest>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self {
            title: title.into(),
            slides,
        })
    }

    /// Deck title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of slides. Always at least one.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Index of the last slide.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.slides.len() - 1
    }

    /// Returns the slide at `index`.
    pub fn get(&self, index: usize) -> Option<&SlideManifest> {
        self.slides.get(index)
    }

    /// Iterates over slides in order.
    pub fn iter(&self) -> impl Iterator<Item = &SlideManifest> {
        self.slides.iter()
    }

    /// Maps any requested index into range.
    ///
    /// Requests below zero land on the last slide and requests at or past
    /// the end land on the first one, so "previous" from the first slide and
    /// "next" from the last slide stay well-defined.
    #[must_use]
    pub fn wrap(&self, target: isize) -> usize {
        match usize::try_from(target) {
            Ok(index) if index < self.slides.len() => index,
            Ok(_) => 0,
            Err(_) => self.last_index(),
        }
    }
}
