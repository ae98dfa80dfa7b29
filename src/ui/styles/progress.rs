// SPDX-License-Identifier: MPL-2.0
//! Progress bar style.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::progress_bar;
use iced::{Background, Border, Color, Theme};

pub fn deck(_theme: &Theme) -> progress_bar::Style {
    progress_bar::Style {
        background: Background::Color(Color {
            a: opacity::SUBTLE,
            ..palette::PARCHMENT
        }),
        bar: Background::Color(palette::GOLD),
        border: Border {
            radius: radius::NONE.into(),
            ..Border::default()
        },
    }
}
