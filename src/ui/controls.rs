// SPDX-License-Identifier: MPL-2.0
//! Deck controls: previous/next arrows, position dots and progress bar.
//!
//! Every control only emits an [`InputEvent`]; the controller decides what it
//! means. Dot and progress state is read back from the [`SlideSurface`], which
//! the controller keeps in sync.

use super::design_tokens::{sizing, spacing, typography};
use super::styles;
use super::surface::SlideSurface;
use crate::domain::input::InputEvent;
use iced::widget::{button, progress_bar, tooltip, Column, Row, Space, Text};
use iced::{alignment, Element, Length};

const PREVIOUS_GLYPH: &str = "‹";
const NEXT_GLYPH: &str = "›";

/// Label for the dot tooltip, 1-based.
#[must_use]
pub fn dot_label(dot: usize) -> String {
    format!("Go to slide {}", dot + 1)
}

/// Builds the controls bar. `on_input` lifts control events into the
/// application message type.
pub fn view<'a, Message: Clone + 'a>(
    surface: &SlideSurface,
    on_input: impl Fn(InputEvent) -> Message,
) -> Element<'a, Message> {
    let previous = arrow(PREVIOUS_GLYPH, on_input(InputEvent::PreviousControl));
    let next = arrow(NEXT_GLYPH, on_input(InputEvent::NextControl));

    let dots = (0..surface.dot_count()).fold(Row::new().spacing(spacing::XS), |row, dot| {
        let marker = button(Space::new())
            .width(Length::Fixed(sizing::DOT))
            .height(Length::Fixed(sizing::DOT))
            .padding(0)
            .style(styles::button::dot(surface.is_dot_active(dot)))
            .on_press(on_input(InputEvent::Indicator(dot)));
        row.push(styles::tooltip::styled(
            marker,
            dot_label(dot),
            tooltip::Position::Top,
        ))
    });

    let bar = Row::new()
        .push(previous)
        .push(Space::new().width(Length::Fill))
        .push(dots)
        .push(Space::new().width(Length::Fill))
        .push(next)
        .align_y(alignment::Vertical::Center)
        .padding([0.0, spacing::MD])
        .height(Length::Fixed(sizing::CONTROLS_HEIGHT));

    let progress = progress_bar(0.0..=100.0, surface.progress())
        .girth(sizing::PROGRESS_HEIGHT)
        .style(styles::progress::deck);

    Column::new().push(progress).push(bar).into()
}

fn arrow<'a, Message: Clone + 'a>(glyph: &'a str, message: Message) -> Element<'a, Message> {
    button(
        Text::new(glyph)
            .size(typography::EMPHASIS)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fixed(sizing::ICON_XL))
    .height(Length::Fixed(sizing::ICON_XL))
    .style(styles::button::control)
    .on_press(message)
    .into()
}
