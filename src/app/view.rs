// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::deck::SlideRegistry;
use crate::ui::controls;
use crate::ui::design_tokens::palette;
use crate::ui::stage::Stage;
use crate::ui::surface::SlideSurface;
use iced::widget::{container, Column, Container};
use iced::{Background, Element, Length};

/// Stage on top, controls below.
pub fn view<'a>(registry: &'a SlideRegistry, surface: &'a SlideSurface) -> Element<'a, Message> {
    let column = Column::new()
        .push(Stage::new(registry, surface).into_element())
        .push(controls::view(surface, Message::Input));

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(palette::BACKDROP)),
            ..container::Style::default()
        })
        .into()
}
