// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::WindowConfig;
use crate::deck::SlideRegistry;
use crate::domain::input::InputEvent;
use crate::navigation::ControllerSettings;
use iced::{touch, window};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Frame or timer tick.
    Tick(Instant),
    /// Input already translated for the deck (keys, clicks, controls).
    Input(InputEvent),
    /// Raw touch event; needs the finger set to become an [`InputEvent`].
    Touch(touch::Event),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
}

/// Everything the application needs at startup, resolved by the launcher.
#[derive(Debug, Clone)]
pub struct Flags {
    /// The deck to present.
    pub deck: SlideRegistry,
    /// Navigation timing and gesture parameters.
    pub settings: ControllerSettings,
    /// Initial window size overrides.
    pub window: WindowConfig,
}
