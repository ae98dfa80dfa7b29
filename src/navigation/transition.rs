// SPDX-License-Identifier: MPL-2.0
//! Slide transition state machine.
//!
//! A transition runs in three steps on a fixed duration `T`:
//!
//! 1. **Acquire** (t = 0): lock, stage the incoming slide off-screen on the
//!    side of travel, then start the crossfade. Both slides are active.
//! 2. **Midpoint** (t = T/2): commit the index, refresh indicators and reveal
//!    the incoming slide's content.
//! 3. **Completion** (t = T): deactivate the outgoing slide and unlock.
//!
//! The engine does not own a clock. The caller schedules the midpoint and
//! completion using [`Transition::midpoint_at`] and
//! [`Transition::completes_at`] and calls back into the engine when they are
//! due.

use super::indicators::IndicatorSync;
use super::state::NavigationState;
use crate::application::port::Renderer;
use crate::config::defaults::OUTGOING_OPACITY;
use crate::deck::SlideRegistry;
use crate::domain::deck::{RevealPlan, SlideManifest};
use crate::domain::ui::{Direction, Opacity, SlideOffset, TransitionDuration};
use std::time::Instant;

/// One in-flight move between two slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    pub started_at: Instant,
}

impl Transition {
    /// When the index is committed and the content reveal starts.
    #[must_use]
    pub fn midpoint_at(&self, duration: TransitionDuration) -> Instant {
        self.started_at + duration.midpoint()
    }

    /// When the outgoing slide is deactivated and the lock released.
    #[must_use]
    pub fn completes_at(&self, duration: TransitionDuration) -> Instant {
        self.started_at + duration.as_duration()
    }
}

/// Where the engine is in the transition protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No transition in flight.
    #[default]
    Idle,
    /// Crossfade running, index not yet committed.
    Entering(Transition),
    /// Index committed, waiting for the crossfade to finish.
    Settling(Transition),
}

impl Phase {
    /// The in-flight transition, if any.
    #[must_use]
    pub fn transition(&self) -> Option<&Transition> {
        match self {
            Self::Idle => None,
            Self::Entering(transition) | Self::Settling(transition) => Some(transition),
        }
    }
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoToOutcome {
    /// A transition was started.
    Started(Transition),
    /// Dropped: another transition holds the lock.
    Busy,
    /// Dropped: the target is already the current slide.
    AlreadyCurrent,
    /// Dropped: the deck has been shut down.
    Closed,
}

impl GoToOutcome {
    #[must_use]
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started(_))
    }
}

/// Drives slide transitions through the renderer.
#[derive(Debug, Clone)]
pub struct TransitionEngine {
    duration: TransitionDuration,
    phase: Phase,
}

impl TransitionEngine {
    #[must_use]
    pub fn new(duration: TransitionDuration) -> Self {
        Self {
            duration,
            phase: Phase::Idle,
        }
    }

    #[must_use]
    pub fn duration(&self) -> TransitionDuration {
        self.duration
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Starts a transition toward `target`, wrapping it into the deck.
    ///
    /// Requests made while locked, or resolving to the current slide, are
    /// dropped without touching state or the renderer.
    pub fn begin<R: Renderer>(
        &mut self,
        state: &mut NavigationState,
        registry: &SlideRegistry,
        target: isize,
        now: Instant,
        renderer: &mut R,
    ) -> GoToOutcome {
        if state.is_animating {
            return GoToOutcome::Busy;
        }
        let from = state.current_index;
        let to = registry.wrap(target);
        // Also covers targets that only match after wrapping, e.g. "next" on
        // a single-slide deck.
        if to == from {
            return GoToOutcome::AlreadyCurrent;
        }

        let direction = Direction::between(from, to);
        let transition = Transition {
            from,
            to,
            direction,
            started_at: now,
        };
        state.is_animating = true;
        self.phase = Phase::Entering(transition);

        renderer.advance_clock(now);

        // Stage the incoming slide and commit that position so the move to
        // center animates from it.
        renderer.set_offset(to, SlideOffset::toward(direction));
        renderer.set_opacity(to, Opacity::TRANSPARENT);
        renderer.set_active(to, true);
        renderer.flush_layout(to);

        renderer.set_offset(from, SlideOffset::toward(direction.opposite()));
        renderer.set_opacity(from, Opacity::new(OUTGOING_OPACITY));
        renderer.set_offset(to, SlideOffset::Center);
        renderer.set_opacity(to, Opacity::OPAQUE);
        renderer.set_visible(from, false);
        renderer.set_visible(to, true);

        tracing::debug!(from, to, ?direction, "transition started");
        GoToOutcome::Started(transition)
    }

    /// Midpoint step: commits the index and reveals the incoming slide.
    ///
    /// Does nothing unless the engine is in [`Phase::Entering`].
    pub fn on_midpoint<R: Renderer>(
        &mut self,
        state: &mut NavigationState,
        registry: &SlideRegistry,
        indicators: &IndicatorSync,
        renderer: &mut R,
    ) {
        let Phase::Entering(transition) = self.phase else {
            return;
        };
        self.phase = Phase::Settling(transition);
        state.current_index = transition.to;

        indicators.sync(transition.to, renderer);
        if let Some(manifest) = registry.get(transition.to) {
            reveal_content(transition.to, manifest, renderer);
        }
    }

    /// Completion step: deactivates the outgoing slide and releases the lock.
    ///
    /// Does nothing unless the engine is in [`Phase::Settling`].
    pub fn on_completion<R: Renderer>(&mut self, state: &mut NavigationState, renderer: &mut R) {
        let Phase::Settling(transition) = self.phase else {
            return;
        };
        renderer.set_active(transition.from, false);
        self.phase = Phase::Idle;
        state.is_animating = false;
        tracing::debug!(index = transition.to, "transition settled");
    }

    /// Abandons any in-flight transition without further renderer calls.
    pub fn abort(&mut self, state: &mut NavigationState) {
        self.phase = Phase::Idle;
        state.is_animating = false;
    }
}

/// Replays a slide's staggered content reveal and attaches ambient motion.
pub fn reveal_content<R: Renderer>(slide: usize, manifest: &SlideManifest, renderer: &mut R) {
    renderer.clear_entrance(slide);
    renderer.flush_entrance(slide);
    renderer.play_entrance_sequence(slide, &RevealPlan::for_slide(manifest));
    renderer.start_ambient_motion(slide, &manifest.floating_elements());
}
