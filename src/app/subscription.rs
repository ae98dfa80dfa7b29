// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and mouse events are translated to deck input right here.
//! Touch events carry finger identities that must be tracked across events,
//! so they are forwarded raw and translated in `update`.

use super::Message;
use crate::config::defaults::FRAME_INTERVAL_MS;
use crate::domain::input::{InputEvent, Key};
use iced::keyboard::{self, key::Named};
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Tick rate while only timers (no animation) are pending.
pub const IDLE_TICK_MS: u64 = 100;

/// Routes native events to deck messages.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(route_event)
}

fn route_event(
    event: event::Event,
    _status: event::Status,
    window_id: window::Id,
) -> Option<Message> {
    match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            Some(Message::Input(InputEvent::Key(map_key(&key))))
        }
        event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::Input(InputEvent::Click))
        }
        event::Event::Touch(touch) => Some(Message::Touch(touch)),
        _ => None,
    }
}

/// Maps a native key to the keys the deck understands.
#[must_use]
pub fn map_key(key: &keyboard::Key) -> Key {
    match key {
        keyboard::Key::Named(Named::ArrowLeft) => Key::ArrowLeft,
        keyboard::Key::Named(Named::ArrowRight) => Key::ArrowRight,
        keyboard::Key::Named(Named::Home) => Key::Home,
        keyboard::Key::Named(Named::End) => Key::End,
        _ => Key::Other,
    }
}

/// Frame ticks while something moves on screen, slower ticks while only
/// timers are pending, nothing otherwise.
pub fn create_tick_subscription(animating: bool, timers_pending: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(FRAME_INTERVAL_MS)).map(Message::Tick)
    } else if timers_pending {
        time::every(Duration::from_millis(IDLE_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_keys_are_mapped() {
        assert_eq!(map_key(&keyboard::Key::Named(Named::ArrowLeft)), Key::ArrowLeft);
        assert_eq!(map_key(&keyboard::Key::Named(Named::ArrowRight)), Key::ArrowRight);
        assert_eq!(map_key(&keyboard::Key::Named(Named::Home)), Key::Home);
        assert_eq!(map_key(&keyboard::Key::Named(Named::End)), Key::End);
    }

    #[test]
    fn other_keys_still_count_as_keys() {
        assert_eq!(map_key(&keyboard::Key::Named(Named::Space)), Key::Other);
        assert_eq!(map_key(&keyboard::Key::Character("a".into())), Key::Other);
    }

    #[test]
    fn frame_tick_is_faster_than_idle_tick() {
        assert!(FRAME_INTERVAL_MS < IDLE_TICK_MS);
    }
}
