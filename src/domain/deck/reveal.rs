// SPDX-License-Identifier: MPL-2.0
//! Content reveal plans.
//!
//! When a slide becomes current its sub-elements do not appear at once: each
//! one fades in on a staggered schedule derived from its category and its
//! position within that category. Icons and the final message also get a
//! continuous effect that keeps running after the entrance.

use super::types::{ElementRef, SlideManifest};
use std::time::Duration;

/// One-shot entrance effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntranceEffect {
    /// Fade from transparent while rising 30 logical pixels.
    FadeInUp,
}

/// Scheduled entrance of a single element, relative to the reveal start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntranceCue {
    pub element: ElementRef,
    pub delay: Duration,
    pub duration: Duration,
    pub effect: EntranceEffect,
}

impl EntranceCue {
    /// Offset at which the entrance has fully completed.
    #[must_use]
    pub fn end(&self) -> Duration {
        self.delay + self.duration
    }
}

/// Continuous effect that repeats for as long as the slide is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopingEffect {
    /// Gentle scale and opacity throb.
    Pulse,
    /// Vertical hop with a smaller rebound.
    Bounce,
}

impl LoopingEffect {
    /// Length of one cycle.
    #[must_use]
    pub fn period(self) -> Duration {
        match self {
            Self::Pulse => Duration::from_millis(2500),
            Self::Bounce => Duration::from_millis(3500),
        }
    }
}

/// What a looping effect is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopTarget {
    /// The icon glyph of an element.
    Icon(ElementRef),
    /// The slide's final message.
    FinalMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopCue {
    pub target: LoopTarget,
    pub effect: LoopingEffect,
}

/// Complete reveal schedule for one slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealPlan {
    pub entrances: Vec<EntranceCue>,
    pub loops: Vec<LoopCue>,
}

impl RevealPlan {
    /// Builds the staggered reveal for a slide.
    pub fn for_slide(manifest: &SlideManifest) -> Self {
        let mut entrances = Vec::with_capacity(manifest.element_count());
        let mut loops = Vec::new();

        for group in manifest.groups() {
            let stagger = group.category.stagger();
            for (ordinal, element) in group.elements.iter().enumerate() {
                let element_ref = ElementRef::new(group.category, ordinal);
                entrances.push(EntranceCue {
                    element: element_ref,
                    delay: stagger.delay_for(ordinal),
                    duration: stagger.duration,
                    effect: EntranceEffect::FadeInUp,
                });
                if element.icon.is_some() && group.category.pulses_icons() {
                    loops.push(LoopCue {
                        target: LoopTarget::Icon(element_ref),
                        effect: LoopingEffect::Pulse,
                    });
                }
            }
        }

        if manifest.final_message.is_some() {
            loops.push(LoopCue {
                target: LoopTarget::FinalMessage,
                effect: LoopingEffect::Bounce,
            });
        }

        entrances.sort_by_key(|cue| (cue.delay, cue.element));
        Self { entrances, loops }
    }

    /// Entrance cue for an element, if the plan contains one.
    pub fn cue_for(&self, element: ElementRef) -> Option<&EntranceCue> {
        self.entrances.iter().find(|cue| cue.element == element)
    }

    /// Offset at which the last entrance completes.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.entrances
            .iter()
            .map(EntranceCue::end)
            .max()
            .unwrap_or_default()
    }

    /// Whether the plan animates nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entrances.is_empty() && self.loops.is_empty()
    }
}
