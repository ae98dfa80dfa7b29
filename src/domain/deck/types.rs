// SPDX-License-Identifier: MPL-2.0
//! Slide content types.
//!
//! A slide is described by a manifest: its heading, its kind, and its
//! sub-elements grouped by structural category. The navigation core reads
//! these groups to build reveal sequences instead of rediscovering elements
//! from presentation markup.

use std::time::Duration;

// =============================================================================
// ElementCategory
// =============================================================================

/// Structural role of a sub-element within a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementCategory {
    /// Body text lines.
    Text,
    /// Media containers (images, figures).
    Media,
    /// Info and importance cards.
    Card,
    /// Note callouts.
    Note,
    /// Feature list items.
    Feature,
    /// Timeline entries.
    Timeline,
    /// Key-point items.
    KeyPoint,
}

impl ElementCategory {
    /// All categories in reveal order.
    pub const ALL: [Self; 7] = [
        Self::Text,
        Self::Media,
        Self::Card,
        Self::Note,
        Self::Feature,
        Self::Timeline,
        Self::KeyPoint,
    ];

    /// Entrance timing for elements of this category.
    ///
    /// Base offsets overlap so categories cascade into each other rather than
    /// waiting for the previous one to finish.
    #[must_use]
    pub fn stagger(self) -> Stagger {
        let (base_ms, step_ms, duration_ms) = match self {
            Self::Text => (0, 100, 800),
            Self::Media => (200, 150, 800),
            Self::Card => (300, 100, 700),
            Self::Note => (350, 100, 700),
            Self::Feature => (400, 100, 700),
            Self::Timeline => (450, 100, 700),
            Self::KeyPoint => (500, 100, 700),
        };
        Stagger {
            base: Duration::from_millis(base_ms),
            step: Duration::from_millis(step_ms),
            duration: Duration::from_millis(duration_ms),
        }
    }

    /// Whether elements of this category drift with the ambient floating motion.
    #[must_use]
    pub fn floats(self) -> bool {
        matches!(self, Self::Card | Self::Note | Self::Feature)
    }

    /// Whether icons on elements of this category pulse continuously.
    #[must_use]
    pub fn pulses_icons(self) -> bool {
        matches!(self, Self::Card | Self::KeyPoint | Self::Feature)
    }
}

/// Per-category entrance timing: element `i` starts at `base + i * step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    /// Delay of the first element.
    pub base: Duration,
    /// Added delay for each following element.
    pub step: Duration,
    /// Length of each element's entrance.
    pub duration: Duration,
}

impl Stagger {
    /// Start delay of the element at `ordinal` within its category.
    #[must_use]
    pub fn delay_for(&self, ordinal: usize) -> Duration {
        let ordinal = u32::try_from(ordinal).unwrap_or(u32::MAX);
        self.base + self.step.saturating_mul(ordinal)
    }
}

// =============================================================================
// Elements and Manifests
// =============================================================================

/// One sub-element of a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideElement {
    /// Displayed text.
    pub text: String,
    /// Optional icon glyph shown before the text.
    pub icon: Option<String>,
}

impl SlideElement {
    /// Creates a text-only element.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: None,
        }
    }

    /// Attaches an icon glyph.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Ordered elements sharing a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementGroup {
    pub category: ElementCategory,
    pub elements: Vec<SlideElement>,
}

/// Address of an element: its category and its position within that category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementRef {
    pub category: ElementCategory,
    pub ordinal: usize,
}

impl ElementRef {
    #[must_use]
    pub fn new(category: ElementCategory, ordinal: usize) -> Self {
        Self { category, ordinal }
    }
}

/// Whether a slide is a title slide or a regular content slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideKind {
    /// Opening or section title. Not decorated.
    Title,
    /// Regular content slide.
    #[default]
    Content,
}

/// Data-driven description of a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideManifest {
    pub heading: String,
    pub kind: SlideKind,
    groups: Vec<ElementGroup>,
    pub final_message: Option<String>,
}

impl SlideManifest {
    /// Creates an empty content slide with the given heading.
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            kind: SlideKind::Content,
            groups: Vec::new(),
            final_message: None,
        }
    }

    /// Sets the slide kind.
    #[must_use]
    pub fn with_kind(mut self, kind: SlideKind) -> Self {
        self.kind = kind;
        self
    }

    /// Appends elements to a category.
    ///
    /// Elements of a category already present are appended to the existing
    /// group, so ordinals stay contiguous per category.
    #[must_use]
    pub fn with_group(mut self, category: ElementCategory, elements: Vec<SlideElement>) -> Self {
        self.push_group(category, elements);
        self
    }

    /// Sets the final message.
    #[must_use]
    pub fn with_final_message(mut self, message: impl Into<String>) -> Self {
        self.final_message = Some(message.into());
        self
    }

    /// In-place variant of [`Self::with_group`].
    pub fn push_group(&mut self, category: ElementCategory, elements: Vec<SlideElement>) {
        if let Some(group) = self.groups.iter_mut().find(|g| g.category == category) {
            group.elements.extend(elements);
        } else {
            self.groups.push(ElementGroup { category, elements });
        }
    }

    /// Element groups in declaration order.
    pub fn groups(&self) -> &[ElementGroup] {
        &self.groups
    }

    /// The group for a category, if the slide has one.
    pub fn group(&self, category: ElementCategory) -> Option<&ElementGroup> {
        self.groups.iter().find(|g| g.category == category)
    }

    /// Looks up a single element.
    pub fn element(&self, element: ElementRef) -> Option<&SlideElement> {
        self.group(element.category)
            .and_then(|g| g.elements.get(element.ordinal))
    }

    /// Total number of sub-elements across all categories.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.groups.iter().map(|g| g.elements.len()).sum()
    }

    /// Whether the stage draws the ornamental border and floating ornaments.
    #[must_use]
    pub fn is_decorated(&self) -> bool {
        self.kind == SlideKind::Content
    }

    /// Elements that receive the ambient floating motion once revealed.
    pub fn floating_elements(&self) -> Vec<ElementRef> {
        self.groups
            .iter()
            .filter(|g| g.category.floats())
            .flat_map(|g| (0..g.elements.len()).map(move |i| ElementRef::new(g.category, i)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SlideManifest {
        SlideManifest::new("Castles")
            .with_group(
                ElementCategory::Text,
                vec![SlideElement::new("a"), SlideElement::new("b")],
            )
            .with_group(
                ElementCategory::Card,
                vec![SlideElement::new("keep").with_icon("🏰")],
            )
            .with_group(ElementCategory::Note, vec![SlideElement::new("note")])
    }

    #[test]
    fn stagger_delay_grows_linearly() {
        let stagger = ElementCategory::Media.stagger();
        assert_eq!(stagger.delay_for(0), Duration::from_millis(200));
        assert_eq!(stagger.delay_for(2), Duration::from_millis(500));
    }

    #[test]
    fn categories_overlap_in_time() {
        let text = ElementCategory::Text.stagger();
        let card = ElementCategory::Card.stagger();
        // The first card starts while the fourth text line is still entering.
        assert!(card.delay_for(0) < text.delay_for(3) + text.duration);
        assert!(card.delay_for(0) > text.delay_for(0));
    }

    #[test]
    fn push_group_merges_same_category() {
        let manifest = sample().with_group(ElementCategory::Text, vec![SlideElement::new("c")]);
        let text = manifest.group(ElementCategory::Text).expect("text group");
        assert_eq!(text.elements.len(), 3);
        assert_eq!(manifest.groups().len(), 3);
        assert_eq!(manifest.element_count(), 5);
    }

    #[test]
    fn element_lookup_by_ref() {
        let manifest = sample();
        let card = manifest
            .element(ElementRef::new(ElementCategory::Card, 0))
            .expect("card exists");
        assert_eq!(card.icon.as_deref(), Some("🏰"));
        assert!(manifest
            .element(ElementRef::new(ElementCategory::Card, 1))
            .is_none());
    }

    #[test]
    fn floating_elements_cover_cards_notes_and_features() {
        let floating = sample().floating_elements();
        assert_eq!(
            floating,
            vec![
                ElementRef::new(ElementCategory::Card, 0),
                ElementRef::new(ElementCategory::Note, 0),
            ]
        );
    }

    #[test]
    fn title_slides_are_not_decorated() {
        assert!(sample().is_decorated());
        assert!(!SlideManifest::new("Intro")
            .with_kind(SlideKind::Title)
            .is_decorated());
    }
}
