// SPDX-License-Identifier: MPL-2.0
//! Rendering port definition.
//!
//! The navigation core never touches widgets. Every visual side effect of a
//! transition goes through [`Renderer`], so the state machine can be driven
//! headless in tests with a recording implementation.

use crate::domain::deck::{ElementRef, RevealPlan};
use crate::domain::ui::{Opacity, SlideOffset};
use std::time::Instant;

/// Visual surface the deck controller drives.
///
/// Style mutations (`set_offset`, `set_opacity`) are animated by the
/// implementation over its own transition curve unless a
/// [`flush_layout`](Renderer::flush_layout) commits them immediately. The
/// controller always calls [`advance_clock`](Renderer::advance_clock) with the
/// logical time of the phase it is about to run before mutating anything.
pub trait Renderer {
    /// Reports the time at which the following mutations take effect.
    fn advance_clock(&mut self, _now: Instant) {}

    /// Moves a slide to a resting position.
    fn set_offset(&mut self, slide: usize, offset: SlideOffset);

    /// Changes a slide's opacity.
    fn set_opacity(&mut self, slide: usize, opacity: Opacity);

    /// Marks a slide as participating in display (drawn) or not.
    fn set_active(&mut self, slide: usize, active: bool);

    /// Toggles assistive-technology visibility of a slide.
    fn set_visible(&mut self, slide: usize, visible: bool);

    /// Commits pending style changes on a slide without animating them, so
    /// the next mutation animates from the committed state.
    fn flush_layout(&mut self, slide: usize);

    /// Removes any entrance animation previously applied to a slide's elements.
    fn clear_entrance(&mut self, slide: usize);

    /// Commits a cleared entrance so the next sequence starts from the
    /// elements' hidden state. Panel placement is left untouched: an
    /// in-flight offset or opacity animation keeps running.
    fn flush_entrance(&mut self, slide: usize);

    /// Starts a staggered content reveal on a slide.
    fn play_entrance_sequence(&mut self, slide: usize, plan: &RevealPlan);

    /// Attaches continuous ambient motion to some of a slide's elements.
    fn start_ambient_motion(&mut self, slide: usize, elements: &[ElementRef]);

    /// Sets the progress indicator's extent, in percent.
    fn set_progress(&mut self, percent: f32);

    /// Highlights or clears one position indicator.
    fn set_dot_active(&mut self, dot: usize, active: bool);
}
