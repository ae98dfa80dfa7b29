// SPDX-License-Identifier: MPL-2.0
//! Translation of raw input into navigation requests.
//!
//! Keys, controls and indicators map directly to a request. Touches go
//! through a small gesture recognizer that resolves at most one swipe per
//! touch sequence.

use crate::domain::input::{InputEvent, Key, TouchPhase, TouchPoint};
use crate::domain::ui::SwipeThreshold;

/// Navigation request, relative to the current slide where applicable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    Previous,
    Next,
    First,
    Last,
    To(usize),
}

impl NavRequest {
    /// Resolves the request into a raw (unwrapped) target index.
    #[must_use]
    pub fn target(self, current: usize, slide_count: usize) -> isize {
        let current = to_isize(current);
        match self {
            Self::Previous => current - 1,
            Self::Next => current + 1,
            Self::First => 0,
            Self::Last => to_isize(slide_count) - 1,
            Self::To(index) => to_isize(index),
        }
    }
}

fn to_isize(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}

/// What the dispatcher decided for one input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dispatch {
    /// Navigation to perform, if any.
    pub request: Option<NavRequest>,
    /// Whether the platform's default handling of the event should be
    /// suppressed (arrow keys would otherwise scroll).
    pub prevent_default: bool,
    /// Whether the event counts as deliberate user interaction.
    pub user_interaction: bool,
}

/// Per touch sequence tracking state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
    pub start: TouchPoint,
    /// Set once the sequence produced a swipe; later moves are ignored.
    pub resolved: bool,
}

/// Stateful input translator.
#[derive(Debug, Clone)]
pub struct InputDispatcher {
    threshold: SwipeThreshold,
    gesture: Option<GestureState>,
}

impl InputDispatcher {
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            threshold,
            gesture: None,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> SwipeThreshold {
        self.threshold
    }

    /// The touch sequence currently tracked, if any.
    #[must_use]
    pub fn gesture(&self) -> Option<&GestureState> {
        self.gesture.as_ref()
    }

    /// Whether a single-finger touch sequence is in progress.
    #[must_use]
    pub fn is_tracking_gesture(&self) -> bool {
        self.gesture.is_some()
    }

    /// Translates one event.
    pub fn dispatch(&mut self, event: InputEvent) -> Dispatch {
        let user_interaction = event.is_user_interaction();
        let (request, prevent_default) = match event {
            InputEvent::Key(key) => match key {
                Key::ArrowLeft => (Some(NavRequest::Previous), true),
                Key::ArrowRight => (Some(NavRequest::Next), true),
                Key::Home => (Some(NavRequest::First), true),
                Key::End => (Some(NavRequest::Last), true),
                Key::Other => (None, false),
            },
            InputEvent::Click => (None, false),
            InputEvent::PreviousControl => (Some(NavRequest::Previous), false),
            InputEvent::NextControl => (Some(NavRequest::Next), false),
            InputEvent::Indicator(index) => (Some(NavRequest::To(index)), false),
            InputEvent::Touch {
                phase,
                contacts,
                position,
            } => (self.track_touch(phase, contacts, position), false),
        };

        Dispatch {
            request,
            prevent_default,
            user_interaction,
        }
    }

    fn track_touch(
        &mut self,
        phase: TouchPhase,
        contacts: usize,
        position: TouchPoint,
    ) -> Option<NavRequest> {
        match phase {
            TouchPhase::Started => {
                // A second finger landing turns the sequence into a pinch or
                // similar; it never becomes a swipe.
                self.gesture = (contacts == 1).then_some(GestureState {
                    start: position,
                    resolved: false,
                });
                None
            }
            TouchPhase::Moved => {
                if contacts != 1 {
                    self.gesture = None;
                    return None;
                }
                let gesture = self.gesture.as_mut()?;
                if gesture.resolved {
                    return None;
                }
                let dx = position.x - gesture.start.x;
                let dy = position.y - gesture.start.y;
                if dx.abs() > dy.abs() && dx.abs() > self.threshold.value() {
                    gesture.resolved = true;
                    tracing::debug!(dx, dy, "swipe recognized");
                    Some(if dx < 0.0 {
                        NavRequest::Next
                    } else {
                        NavRequest::Previous
                    })
                } else {
                    None
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if contacts == 0 {
                    self.gesture = None;
                }
                None
            }
        }
    }
}

impl Default for InputDispatcher {
    fn default() -> Self {
        Self::new(SwipeThreshold::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(phase: TouchPhase, contacts: usize, x: f32, y: f32) -> InputEvent {
        InputEvent::Touch {
            phase,
            contacts,
            position: TouchPoint::new(x, y),
        }
    }

    fn swipe(dispatcher: &mut InputDispatcher, points: &[(f32, f32)]) -> Vec<NavRequest> {
        let mut requests = Vec::new();
        let (x0, y0) = points[0];
        requests.extend(dispatcher.dispatch(touch(TouchPhase::Started, 1, x0, y0)).request);
        for &(x, y) in &points[1..] {
            requests.extend(dispatcher.dispatch(touch(TouchPhase::Moved, 1, x, y)).request);
        }
        let &(x, y) = points.last().unwrap_or(&(x0, y0));
        requests.extend(dispatcher.dispatch(touch(TouchPhase::Ended, 0, x, y)).request);
        requests
    }

    #[test]
    fn keys_map_to_requests_and_suppress_default() {
        let mut dispatcher = InputDispatcher::default();
        let cases = [
            (Key::ArrowLeft, NavRequest::Previous),
            (Key::ArrowRight, NavRequest::Next),
            (Key::Home, NavRequest::First),
            (Key::End, NavRequest::Last),
        ];
        for (key, expected) in cases {
            let dispatch = dispatcher.dispatch(InputEvent::Key(key));
            assert_eq!(dispatch.request, Some(expected), "{key:?}");
            assert!(dispatch.prevent_default);
            assert!(dispatch.user_interaction);
        }
    }

    #[test]
    fn other_keys_only_count_as_interaction() {
        let mut dispatcher = InputDispatcher::default();
        let dispatch = dispatcher.dispatch(InputEvent::Key(Key::Other));
        assert_eq!(dispatch.request, None);
        assert!(!dispatch.prevent_default);
        assert!(dispatch.user_interaction);
    }

    #[test]
    fn controls_and_indicators_map_to_requests() {
        let mut dispatcher = InputDispatcher::default();
        assert_eq!(
            dispatcher.dispatch(InputEvent::PreviousControl).request,
            Some(NavRequest::Previous)
        );
        assert_eq!(
            dispatcher.dispatch(InputEvent::NextControl).request,
            Some(NavRequest::Next)
        );
        assert_eq!(
            dispatcher.dispatch(InputEvent::Indicator(4)).request,
            Some(NavRequest::To(4))
        );
        assert_eq!(dispatcher.dispatch(InputEvent::Click).request, None);
    }

    #[test]
    fn request_targets_are_unwrapped() {
        assert_eq!(NavRequest::Previous.target(0, 5), -1);
        assert_eq!(NavRequest::Next.target(4, 5), 5);
        assert_eq!(NavRequest::First.target(3, 5), 0);
        assert_eq!(NavRequest::Last.target(0, 5), 4);
        assert_eq!(NavRequest::To(2).target(0, 5), 2);
    }

    #[test]
    fn rightward_swipe_requests_previous_exactly_once() {
        let mut dispatcher = InputDispatcher::default();
        let requests = swipe(
            &mut dispatcher,
            &[(100.0, 100.0), (130.0, 105.0), (150.0, 110.0), (190.0, 112.0)],
        );
        assert_eq!(requests, vec![NavRequest::Previous]);
        assert!(!dispatcher.is_tracking_gesture());
    }

    #[test]
    fn leftward_swipe_requests_next() {
        let mut dispatcher = InputDispatcher::default();
        let requests = swipe(&mut dispatcher, &[(200.0, 50.0), (140.0, 60.0)]);
        assert_eq!(requests, vec![NavRequest::Next]);
    }

    #[test]
    fn short_swipe_is_ignored() {
        let mut dispatcher = InputDispatcher::default();
        let requests = swipe(&mut dispatcher, &[(100.0, 100.0), (130.0, 100.0)]);
        assert!(requests.is_empty());
    }

    #[test]
    fn mostly_vertical_drag_is_ignored() {
        let mut dispatcher = InputDispatcher::default();
        let requests = swipe(&mut dispatcher, &[(100.0, 100.0), (150.0, 180.0)]);
        assert!(requests.is_empty());
    }

    #[test]
    fn each_touch_sequence_resolves_independently() {
        let mut dispatcher = InputDispatcher::default();
        let first = swipe(&mut dispatcher, &[(100.0, 0.0), (150.0, 0.0)]);
        let second = swipe(&mut dispatcher, &[(100.0, 0.0), (50.0, 0.0)]);
        assert_eq!(first, vec![NavRequest::Previous]);
        assert_eq!(second, vec![NavRequest::Next]);
    }

    #[test]
    fn multi_touch_never_swipes() {
        let mut dispatcher = InputDispatcher::default();
        dispatcher.dispatch(touch(TouchPhase::Started, 1, 100.0, 0.0));
        dispatcher.dispatch(touch(TouchPhase::Started, 2, 300.0, 0.0));
        assert!(!dispatcher.is_tracking_gesture());

        let dispatch = dispatcher.dispatch(touch(TouchPhase::Moved, 2, 200.0, 0.0));
        assert_eq!(dispatch.request, None);
        let dispatch = dispatcher.dispatch(touch(TouchPhase::Moved, 1, 200.0, 0.0));
        assert_eq!(dispatch.request, None);
    }

    #[test]
    fn threshold_is_configurable() {
        let mut dispatcher = InputDispatcher::new(SwipeThreshold::new(100.0));
        let requests = swipe(&mut dispatcher, &[(0.0, 0.0), (80.0, 0.0)]);
        assert!(requests.is_empty());
        let requests = swipe(&mut dispatcher, &[(0.0, 0.0), (120.0, 0.0)]);
        assert_eq!(requests, vec![NavRequest::Previous]);
    }

    #[test]
    fn only_touch_start_counts_as_interaction() {
        let mut dispatcher = InputDispatcher::default();
        assert!(dispatcher.dispatch(touch(TouchPhase::Started, 1, 0.0, 0.0)).user_interaction);
        assert!(!dispatcher.dispatch(touch(TouchPhase::Moved, 1, 5.0, 0.0)).user_interaction);
        assert!(!dispatcher.dispatch(touch(TouchPhase::Ended, 0, 5.0, 0.0)).user_interaction);
    }
}
