// SPDX-License-Identifier: MPL-2.0
//! Application root state and the Iced runtime wiring.
//!
//! The `App` owns a [`DeckController`] driving a [`SlideSurface`]. Native
//! events become [`InputEvent`]s, ticks advance the controller's timers, and
//! the view reads back whatever the surface currently shows.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::TouchTracker;

use crate::config::WindowConfig;
use crate::deck::SlideRegistry;
use crate::domain::input::InputEvent;
use crate::navigation::{ControllerSettings, DeckController};
use crate::ui::surface::SlideSurface;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state.
pub struct App {
    controller: DeckController<SlideSurface>,
    touches: TouchTracker,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_index", &self.controller.current_index())
            .field("is_animating", &self.controller.is_animating())
            .field("closed", &self.controller.is_closed())
            .finish()
    }
}

/// Builds the window settings, honoring size overrides from the config.
#[allow(clippy::cast_precision_loss)]
pub fn window_settings(config: &WindowConfig) -> window::Settings {
    let width = config
        .width
        .unwrap_or(WINDOW_DEFAULT_WIDTH)
        .max(MIN_WINDOW_WIDTH);
    let height = config
        .height
        .unwrap_or(WINDOW_DEFAULT_HEIGHT)
        .max(MIN_WINDOW_HEIGHT);

    window::Settings {
        size: iced::Size::new(width as f32, height as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        // Timers are cancelled before the window goes away.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let window = window_settings(&flags.window);
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Lays out the deck and starts its timers.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let app = Self::with_clock(flags.deck, flags.settings, Instant::now());
        (app, Task::none())
    }

    fn with_clock(deck: SlideRegistry, settings: ControllerSettings, now: Instant) -> Self {
        let surface = SlideSurface::new(deck.slide_count(), settings.transition, now);
        Self {
            controller: DeckController::new(deck, settings, surface, now),
            touches: TouchTracker::new(),
        }
    }

    fn title(&self) -> String {
        let title = self.controller.registry().title();
        if title.is_empty() {
            "Slides".to_string()
        } else {
            title.to_string()
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.controller.is_closed() {
            return Subscription::none();
        }
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.controller.renderer().is_animating(),
            self.controller.next_deadline().is_some(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => {
                self.controller.tick(now);
                Task::none()
            }
            Message::Input(event) => {
                self.handle_input(event, Instant::now());
                Task::none()
            }
            Message::Touch(event) => {
                let event = self.touches.translate(event);
                self.handle_input(event, Instant::now());
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                self.controller.shutdown();
                window::close(id)
            }
        }
    }

    fn handle_input(&mut self, event: InputEvent, now: Instant) {
        // Catch up on anything that fell due between ticks first.
        self.controller.tick(now);
        let dispatch = self.controller.handle_input(event, now);
        if dispatch.prevent_default {
            // Nothing downstream scrolls, so there is no default to suppress.
            tracing::trace!(?event, "navigation key consumed");
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self.controller.registry(), self.controller.renderer())
    }
}
