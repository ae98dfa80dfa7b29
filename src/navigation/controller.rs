// SPDX-License-Identifier: MPL-2.0
//! Deck controller.
//!
//! Owns the navigation state and every collaborator that mutates it. All
//! entry points take the current [`Instant`]; deferred work (transition
//! phases, the startup reveal, auto-advance) is queued as timed events and
//! runs from [`DeckController::tick`]. Due events are processed in deadline
//! order with the clock set to each event's own deadline, so the outcome does
//! not depend on how often `tick` is called.

use super::auto_advance::AutoAdvance;
use super::indicators::IndicatorSync;
use super::input::{Dispatch, InputDispatcher, NavRequest};
use super::state::NavigationState;
use super::timer::TimerQueue;
use super::transition::{reveal_content, GoToOutcome, Phase, TransitionEngine};
use crate::application::port::Renderer;
use crate::config::defaults::INITIAL_REVEAL_DELAY_MS;
use crate::config::NavigationConfig;
use crate::deck::SlideRegistry;
use crate::domain::input::InputEvent;
use crate::domain::ui::{
    AutoAdvanceInterval, Opacity, SlideOffset, SwipeThreshold, TransitionDuration,
};
use std::time::{Duration, Instant};

/// Timing and gesture parameters, fixed for the controller's lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerSettings {
    pub transition: TransitionDuration,
    pub swipe_threshold: SwipeThreshold,
    /// `None` disables auto-advance.
    pub auto_advance: Option<AutoAdvanceInterval>,
    pub initial_reveal_delay: Duration,
}

impl ControllerSettings {
    /// Builds settings from the `[navigation]` config section.
    #[must_use]
    pub fn from_config(config: &NavigationConfig) -> Self {
        Self {
            transition: config.transition(),
            swipe_threshold: config.swipe_threshold(),
            auto_advance: config.auto_advance_interval(),
            initial_reveal_delay: Duration::from_millis(INITIAL_REVEAL_DELAY_MS),
        }
    }

    /// Same settings with auto-advance disabled.
    #[must_use]
    pub fn without_auto_advance(mut self) -> Self {
        self.auto_advance = None;
        self
    }
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self::from_config(&NavigationConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeckEvent {
    InitialReveal,
    Midpoint,
    Completion,
    AutoAdvance,
}

/// Single owner of a running deck.
#[derive(Debug)]
pub struct DeckController<R: Renderer> {
    registry: SlideRegistry,
    state: NavigationState,
    engine: TransitionEngine,
    indicators: IndicatorSync,
    input: InputDispatcher,
    auto_advance: AutoAdvance,
    timers: TimerQueue<DeckEvent>,
    renderer: R,
    closed: bool,
}

impl<R: Renderer> DeckController<R> {
    /// Lays out the deck on the first slide and starts its timers.
    pub fn new(
        registry: SlideRegistry,
        settings: ControllerSettings,
        mut renderer: R,
        now: Instant,
    ) -> Self {
        let indicators = IndicatorSync::new(registry.slide_count());
        let mut timers = TimerQueue::new();
        let mut auto_advance = AutoAdvance::new(settings.auto_advance);

        renderer.advance_clock(now);
        for slide in 0..registry.slide_count() {
            let current = slide == 0;
            let offset = if current {
                SlideOffset::Center
            } else {
                SlideOffset::OffRight
            };
            let opacity = if current {
                Opacity::OPAQUE
            } else {
                Opacity::TRANSPARENT
            };
            renderer.set_offset(slide, offset);
            renderer.set_opacity(slide, opacity);
            renderer.set_active(slide, current);
            renderer.set_visible(slide, current);
            renderer.flush_layout(slide);
        }
        indicators.sync(0, &mut renderer);

        timers.schedule(now + settings.initial_reveal_delay, DeckEvent::InitialReveal);
        auto_advance.arm(&mut timers, now, DeckEvent::AutoAdvance);

        tracing::debug!(
            slides = registry.slide_count(),
            transition_ms = settings.transition.as_millis(),
            auto_advance = auto_advance.is_active(),
            "deck controller ready"
        );

        Self {
            state: NavigationState::new(auto_advance.is_active()),
            engine: TransitionEngine::new(settings.transition),
            input: InputDispatcher::new(settings.swipe_threshold),
            registry,
            indicators,
            auto_advance,
            timers,
            renderer,
            closed: false,
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Requests a transition to `target`, wrapping out-of-range indices.
    pub fn go_to(&mut self, target: isize, now: Instant) -> GoToOutcome {
        if self.closed {
            return GoToOutcome::Closed;
        }
        let outcome = self.engine.begin(
            &mut self.state,
            &self.registry,
            target,
            now,
            &mut self.renderer,
        );
        match outcome {
            GoToOutcome::Started(transition) => {
                let duration = self.engine.duration();
                self.timers
                    .schedule(transition.midpoint_at(duration), DeckEvent::Midpoint);
                self.timers
                    .schedule(transition.completes_at(duration), DeckEvent::Completion);
            }
            dropped => tracing::debug!(target, outcome = ?dropped, "navigation dropped"),
        }
        outcome
    }

    /// Resolves a relative request against the current slide.
    pub fn request(&mut self, request: NavRequest, now: Instant) -> GoToOutcome {
        let target = request.target(self.state.current_index, self.registry.slide_count());
        self.go_to(target, now)
    }

    pub fn next(&mut self, now: Instant) -> GoToOutcome {
        self.request(NavRequest::Next, now)
    }

    pub fn previous(&mut self, now: Instant) -> GoToOutcome {
        self.request(NavRequest::Previous, now)
    }

    pub fn first(&mut self, now: Instant) -> GoToOutcome {
        self.request(NavRequest::First, now)
    }

    pub fn last(&mut self, now: Instant) -> GoToOutcome {
        self.request(NavRequest::Last, now)
    }

    /// Routes one input event.
    ///
    /// The first user interaction stops auto-advance before any navigation
    /// the event itself requests.
    pub fn handle_input(&mut self, event: InputEvent, now: Instant) -> Dispatch {
        if self.closed {
            return Dispatch::default();
        }
        let dispatch = self.input.dispatch(event);
        if dispatch.user_interaction && self.auto_advance.cancel(&mut self.timers) {
            self.state.auto_advance_active = false;
        }
        if let Some(request) = dispatch.request {
            self.request(request, now);
        }
        dispatch
    }

    // =========================================================================
    // Time
    // =========================================================================

    /// Runs every event due at or before `now`.
    pub fn tick(&mut self, now: Instant) {
        while let Some((due, event)) = self.timers.pop_due(now) {
            self.renderer.advance_clock(due);
            match event {
                DeckEvent::InitialReveal => {
                    let index = self.state.current_index;
                    if let Some(manifest) = self.registry.get(index) {
                        reveal_content(index, manifest, &mut self.renderer);
                    }
                }
                DeckEvent::Midpoint => self.engine.on_midpoint(
                    &mut self.state,
                    &self.registry,
                    &self.indicators,
                    &mut self.renderer,
                ),
                DeckEvent::Completion => {
                    self.engine.on_completion(&mut self.state, &mut self.renderer);
                }
                DeckEvent::AutoAdvance => {
                    let tracking = self.input.is_tracking_gesture();
                    if self.auto_advance.on_tick(self.state.is_animating, tracking) {
                        self.next(due);
                    }
                    self.auto_advance
                        .arm(&mut self.timers, due, DeckEvent::AutoAdvance);
                }
            }
        }
        self.renderer.advance_clock(now);
    }

    /// Earliest pending deadline, for callers that sleep between ticks.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Cancels all pending work. Later requests return
    /// [`GoToOutcome::Closed`] and input is ignored.
    pub fn shutdown(&mut self) {
        if self.closed {
            return;
        }
        self.auto_advance.cancel(&mut self.timers);
        self.timers.cancel_all();
        self.engine.abort(&mut self.state);
        self.state.auto_advance_active = false;
        self.closed = true;
        tracing::debug!("deck controller shut down");
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.state.is_animating
    }

    #[must_use]
    pub fn auto_advance_active(&self) -> bool {
        self.state.auto_advance_active
    }

    #[must_use]
    pub fn state(&self) -> NavigationState {
        self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.registry.slide_count()
    }

    #[must_use]
    pub fn registry(&self) -> &SlideRegistry {
        &self.registry
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[must_use]
    pub fn is_tracking_gesture(&self) -> bool {
        self.input.is_tracking_gesture()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
