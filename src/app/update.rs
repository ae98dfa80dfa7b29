// SPDX-License-Identifier: MPL-2.0
//! Touch translation.
//!
//! Native touch events report one finger at a time. The deck needs to know how
//! many fingers remain on the surface, so the set of pressed fingers is kept
//! here and every event is turned into an [`InputEvent::Touch`].

use crate::domain::input::{InputEvent, TouchPhase, TouchPoint};
use iced::touch;
use std::collections::HashSet;

/// Fingers currently on the surface.
#[derive(Debug, Default)]
pub struct TouchTracker {
    fingers: HashSet<touch::Finger>,
}

impl TouchTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contacts(&self) -> usize {
        self.fingers.len()
    }

    /// Records `event` and returns it as deck input.
    pub fn translate(&mut self, event: touch::Event) -> InputEvent {
        let (phase, position) = match event {
            touch::Event::FingerPressed { id, position } => {
                self.fingers.insert(id);
                (TouchPhase::Started, position)
            }
            touch::Event::FingerMoved { position, .. } => (TouchPhase::Moved, position),
            touch::Event::FingerLifted { id, position } => {
                self.fingers.remove(&id);
                (TouchPhase::Ended, position)
            }
            touch::Event::FingerLost { id, position } => {
                self.fingers.remove(&id);
                (TouchPhase::Cancelled, position)
            }
        };

        InputEvent::Touch {
            phase,
            contacts: self.fingers.len(),
            position: TouchPoint::new(position.x, position.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    fn press(id: u64, x: f32) -> touch::Event {
        touch::Event::FingerPressed {
            id: touch::Finger(id),
            position: Point::new(x, 0.0),
        }
    }

    #[test]
    fn single_finger_sequence_counts_contacts() {
        let mut tracker = TouchTracker::new();
        let started = tracker.translate(press(1, 100.0));
        assert_eq!(
            started,
            InputEvent::Touch {
                phase: TouchPhase::Started,
                contacts: 1,
                position: TouchPoint::new(100.0, 0.0),
            }
        );

        let moved = tracker.translate(touch::Event::FingerMoved {
            id: touch::Finger(1),
            position: Point::new(40.0, 0.0),
        });
        assert!(matches!(
            moved,
            InputEvent::Touch { phase: TouchPhase::Moved, contacts: 1, .. }
        ));

        let ended = tracker.translate(touch::Event::FingerLifted {
            id: touch::Finger(1),
            position: Point::new(40.0, 0.0),
        });
        assert!(matches!(
            ended,
            InputEvent::Touch { phase: TouchPhase::Ended, contacts: 0, .. }
        ));
    }

    #[test]
    fn second_finger_reports_two_contacts() {
        let mut tracker = TouchTracker::new();
        tracker.translate(press(1, 0.0));
        let second = tracker.translate(press(2, 50.0));
        assert!(matches!(second, InputEvent::Touch { contacts: 2, .. }));
    }

    #[test]
    fn lost_finger_cancels() {
        let mut tracker = TouchTracker::new();
        tracker.translate(press(7, 0.0));
        let lost = tracker.translate(touch::Event::FingerLost {
            id: touch::Finger(7),
            position: Point::ORIGIN,
        });
        assert!(matches!(
            lost,
            InputEvent::Touch { phase: TouchPhase::Cancelled, contacts: 0, .. }
        ));
        assert_eq!(tracker.contacts(), 0);
    }
}
