// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Previous/next arrow controls.
pub fn control(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::STRONG,
        button::Status::Pressed => opacity::OPAQUE,
        _ => opacity::MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::INK
        })),
        text_color: palette::PARCHMENT,
        border: Border {
            color: palette::GOLD,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Position dot; `active` marks the current slide.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let fill = match (active, status) {
            (true, _) => palette::GOLD,
            (false, button::Status::Hovered) => Color {
                a: opacity::STRONG,
                ..palette::GOLD
            },
            (false, _) => Color {
                a: opacity::SUBTLE,
                ..palette::PARCHMENT
            },
        };

        button::Style {
            background: Some(Background::Color(fill)),
            text_color: Color::TRANSPARENT,
            border: Border {
                color: palette::GOLD,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}
