// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for integration tests.
#![allow(dead_code)]

use iced_slides::application::port::Renderer;
use iced_slides::deck::SlideRegistry;
use iced_slides::domain::deck::{
    ElementCategory, ElementRef, RevealPlan, SlideElement, SlideManifest,
};
use iced_slides::domain::ui::{Opacity, SlideOffset};
use iced_slides::navigation::{ControllerSettings, DeckController};
use std::time::{Duration, Instant};

/// Long enough for any transition plus its reveal to finish.
pub const SETTLE: Duration = Duration::from_secs(2);

/// Headless renderer keeping only the resulting state.
#[derive(Debug, Clone, Default)]
pub struct StateRenderer {
    pub offsets: Vec<SlideOffset>,
    pub opacities: Vec<Opacity>,
    pub active: Vec<bool>,
    pub visible: Vec<bool>,
    pub dots: Vec<bool>,
    pub progress: f32,
    /// Slides whose entrance sequence was played, in order.
    pub reveals: Vec<usize>,
    pub progress_writes: usize,
}

impl StateRenderer {
    pub fn new(slide_count: usize) -> Self {
        Self {
            offsets: vec![SlideOffset::default(); slide_count],
            opacities: vec![Opacity::TRANSPARENT; slide_count],
            active: vec![false; slide_count],
            visible: vec![false; slide_count],
            dots: vec![false; slide_count],
            ..Self::default()
        }
    }

    pub fn active_dots(&self) -> Vec<usize> {
        (0..self.dots.len()).filter(|&i| self.dots[i]).collect()
    }

    pub fn active_slides(&self) -> Vec<usize> {
        (0..self.active.len()).filter(|&i| self.active[i]).collect()
    }

    pub fn visible_slides(&self) -> Vec<usize> {
        (0..self.visible.len()).filter(|&i| self.visible[i]).collect()
    }
}

impl Renderer for StateRenderer {
    fn set_offset(&mut self, slide: usize, offset: SlideOffset) {
        self.offsets[slide] = offset;
    }

    fn set_opacity(&mut self, slide: usize, opacity: Opacity) {
        self.opacities[slide] = opacity;
    }

    fn set_active(&mut self, slide: usize, active: bool) {
        self.active[slide] = active;
    }

    fn set_visible(&mut self, slide: usize, visible: bool) {
        self.visible[slide] = visible;
    }

    fn flush_layout(&mut self, _slide: usize) {}

    fn clear_entrance(&mut self, _slide: usize) {}

    fn flush_entrance(&mut self, _slide: usize) {}

    fn play_entrance_sequence(&mut self, slide: usize, _plan: &RevealPlan) {
        self.reveals.push(slide);
    }

    fn start_ambient_motion(&mut self, _slide: usize, _elements: &[ElementRef]) {}

    fn set_progress(&mut self, percent: f32) {
        self.progress = percent;
        self.progress_writes += 1;
    }

    fn set_dot_active(&mut self, dot: usize, active: bool) {
        self.dots[dot] = active;
    }
}

/// A deck of `count` content slides with a few elements each.
pub fn deck(count: usize) -> SlideRegistry {
    let slides = (0..count)
        .map(|i| {
            SlideManifest::new(format!("Slide {}", i + 1)).with_group(
                ElementCategory::Card,
                vec![
                    SlideElement::new("First").with_icon("⚔"),
                    SlideElement::new("Second"),
                ],
            )
        })
        .collect();
    SlideRegistry::new("Test deck", slides).expect("non-empty deck")
}

pub fn controller(
    count: usize,
    settings: ControllerSettings,
    now: Instant,
) -> DeckController<StateRenderer> {
    DeckController::new(deck(count), settings, StateRenderer::new(count), now)
}

/// Controller without auto-advance, for tests that only care about manual
/// navigation.
pub fn manual_controller(count: usize, now: Instant) -> DeckController<StateRenderer> {
    controller(count, ControllerSettings::default().without_auto_advance(), now)
}
