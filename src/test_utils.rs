// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and a headless renderer.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::application::port::Renderer;
use crate::domain::deck::{ElementRef, RevealPlan};
use crate::domain::ui::{Opacity, SlideOffset};
use std::time::Instant;

/// Default epsilon for f32 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F32_EPSILON: f32 = 1e-6;

/// One renderer call as seen by [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    Clock(Instant),
    Offset(usize, SlideOffset),
    Opacity(usize, Opacity),
    Active(usize, bool),
    Visible(usize, bool),
    Flush(usize),
    ClearEntrance(usize),
    FlushEntrance(usize),
    /// Slide and number of entrance cues.
    Entrance(usize, usize),
    Ambient(usize, Vec<ElementRef>),
    Progress(f32),
    DotActive(usize, bool),
}

#[derive(Debug, Clone, Copy, Default)]
struct SlideRecord {
    offset: SlideOffset,
    opacity: Opacity,
    active: bool,
    visible: bool,
}

/// Renderer that records every call and keeps the resulting state.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    calls: Vec<RenderCall>,
    slides: Vec<SlideRecord>,
    dots: Vec<bool>,
    progress: f32,
}

impl RecordingRenderer {
    pub fn new(slide_count: usize) -> Self {
        Self {
            calls: Vec::new(),
            slides: vec![SlideRecord::default(); slide_count],
            dots: vec![false; slide_count],
            progress: 0.0,
        }
    }

    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    /// Forgets recorded calls but keeps the resulting state.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn offset(&self, slide: usize) -> SlideOffset {
        self.slides[slide].offset
    }

    pub fn opacity(&self, slide: usize) -> Opacity {
        self.slides[slide].opacity
    }

    pub fn active_slides(&self) -> Vec<usize> {
        (0..self.slides.len())
            .filter(|&i| self.slides[i].active)
            .collect()
    }

    pub fn visible_slides(&self) -> Vec<usize> {
        (0..self.slides.len())
            .filter(|&i| self.slides[i].visible)
            .collect()
    }

    pub fn active_dots(&self) -> Vec<usize> {
        (0..self.dots.len()).filter(|&i| self.dots[i]).collect()
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }
}

impl Renderer for RecordingRenderer {
    fn advance_clock(&mut self, now: Instant) {
        self.calls.push(RenderCall::Clock(now));
    }

    fn set_offset(&mut self, slide: usize, offset: SlideOffset) {
        self.slides[slide].offset = offset;
        self.calls.push(RenderCall::Offset(slide, offset));
    }

    fn set_opacity(&mut self, slide: usize, opacity: Opacity) {
        self.slides[slide].opacity = opacity;
        self.calls.push(RenderCall::Opacity(slide, opacity));
    }

    fn set_active(&mut self, slide: usize, active: bool) {
        self.slides[slide].active = active;
        self.calls.push(RenderCall::Active(slide, active));
    }

    fn set_visible(&mut self, slide: usize, visible: bool) {
        self.slides[slide].visible = visible;
        self.calls.push(RenderCall::Visible(slide, visible));
    }

    fn flush_layout(&mut self, slide: usize) {
        self.calls.push(RenderCall::Flush(slide));
    }

    fn clear_entrance(&mut self, slide: usize) {
        self.calls.push(RenderCall::ClearEntrance(slide));
    }

    fn flush_entrance(&mut self, slide: usize) {
        self.calls.push(RenderCall::FlushEntrance(slide));
    }

    fn play_entrance_sequence(&mut self, slide: usize, plan: &RevealPlan) {
        self.calls
            .push(RenderCall::Entrance(slide, plan.entrances.len()));
    }

    fn start_ambient_motion(&mut self, slide: usize, elements: &[ElementRef]) {
        self.calls.push(RenderCall::Ambient(slide, elements.to_vec()));
    }

    fn set_progress(&mut self, percent: f32) {
        self.progress = percent;
        self.calls.push(RenderCall::Progress(percent));
    }

    fn set_dot_active(&mut self, dot: usize, active: bool) {
        self.dots[dot] = active;
        self.calls.push(RenderCall::DotActive(dot, active));
    }
}
