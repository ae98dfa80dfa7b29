// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.
//!
//! Dot tooltips carry the "Go to slide N" label. They sit over the controls
//! bar, not the slide, so they use the ink-on-parchment inverse of the stage.

use crate::ui::design_tokens::{border, opacity, palette, radius, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Shadow, Theme, Vector};

/// Ink tooltip with parchment text and a gold hairline.
///
/// The deck palette is fixed, so the theme only matters for the signature.
pub fn tooltip_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::INK)),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: Color {
                a: opacity::STRONG,
                ..palette::GOLD
            },
        },
        shadow: Shadow {
            color: Color {
                a: opacity::SUBTLE,
                ..palette::BACKDROP
            },
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: Some(palette::PARCHMENT),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip` in the deck's tooltip style.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XS)
}
