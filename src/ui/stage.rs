// SPDX-License-Identifier: MPL-2.0
//! Slide stage canvas.
//!
//! Paints every active panel at the offset and opacity resolved by the
//! [`SlideSurface`], then its heading, elements and decorations.
//!
//! Canvas coordinates are f32; element counts are small enough that the
//! usize conversions never lose precision.
#![allow(clippy::cast_precision_loss)]

use super::animation;
use super::design_tokens::{border, opacity, palette, radius, sizing, spacing, typography};
use super::surface::{PanelFrame, SlideSurface};
use crate::deck::SlideRegistry;
use crate::domain::deck::{ElementCategory, ElementGroup, ElementRef, SlideKind, SlideManifest};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke, Text};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme, Vector};

/// Approximate advance of one glyph relative to the font size, used to
/// center single-line text.
const GLYPH_ADVANCE: f32 = 0.52;

/// Canvas program drawing the deck.
pub struct Stage<'a> {
    registry: &'a SlideRegistry,
    surface: &'a SlideSurface,
}

impl<'a> Stage<'a> {
    #[must_use]
    pub fn new(registry: &'a SlideRegistry, surface: &'a SlideSurface) -> Self {
        Self { registry, surface }
    }

    pub fn into_element<Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for Stage<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), palette::BACKDROP);

        for panel in self.surface.active_panels() {
            let Some(manifest) = self.registry.get(panel.slide) else {
                continue;
            };
            frame.with_save(|frame| {
                frame.translate(Vector::new(panel.offset * bounds.width, 0.0));
                self.draw_panel(frame, manifest, panel, bounds.size());
            });
        }

        vec![frame.into_geometry()]
    }
}

impl Stage<'_> {
    fn draw_panel(
        &self,
        frame: &mut Frame,
        manifest: &SlideManifest,
        panel: PanelFrame,
        size: Size,
    ) {
        let alpha = panel.opacity;
        frame.fill_rectangle(Point::ORIGIN, size, faded(palette::PARCHMENT, alpha));

        if manifest.is_decorated() {
            self.draw_decorations(frame, size, alpha);
        }

        match manifest.kind {
            SlideKind::Title => {
                let y = size.height / 2.0 - typography::DISPLAY;
                fill_centered(
                    frame,
                    &manifest.heading,
                    y,
                    size.width,
                    typography::DISPLAY,
                    faded(palette::INK, alpha),
                );
            }
            SlideKind::Content => {
                fill_centered(
                    frame,
                    &manifest.heading,
                    spacing::XXL,
                    size.width,
                    typography::TITLE,
                    faded(palette::INK, alpha),
                );
            }
        }

        let mut y = match manifest.kind {
            SlideKind::Title => size.height / 2.0 + spacing::MD,
            SlideKind::Content => spacing::XXL + typography::TITLE + spacing::LG,
        };
        for group in manifest.groups() {
            y = self.draw_group(frame, panel, group, y, size.width);
            y += spacing::SM;
        }

        if let Some(message) = &manifest.final_message {
            let bounce = self.surface.final_message_offset(panel.slide);
            let y = size.height - spacing::XXL - typography::EMPHASIS + bounce;
            fill_centered(
                frame,
                message,
                y,
                size.width,
                typography::EMPHASIS,
                faded(palette::BURGUNDY, alpha),
            );
        }
    }

    fn draw_group(
        &self,
        frame: &mut Frame,
        panel: PanelFrame,
        group: &ElementGroup,
        top: f32,
        width: f32,
    ) -> f32 {
        let left = spacing::XXL * 2.0;
        let row_width = width - left * 2.0;
        let mut y = top;

        for (ordinal, element) in group.elements.iter().enumerate() {
            let element_ref = ElementRef::new(group.category, ordinal);
            let look = self.surface.element(panel.slide, element_ref);
            let alpha = panel.opacity * look.opacity;
            let row_top = y + look.offset_y;

            if let Some(fill) = category_fill(group.category) {
                let background = Path::rounded_rectangle(
                    Point::new(left - spacing::XS, row_top),
                    Size::new(row_width + spacing::XS * 2.0, sizing::ELEMENT_ROW - spacing::XXS),
                    radius::MD.into(),
                );
                frame.fill(&background, faded(fill, alpha * opacity::SURFACE));
            }
            if group.category == ElementCategory::Timeline {
                let center = Point::new(left - spacing::LG, row_top + sizing::ELEMENT_ROW / 2.0);
                let marker = Path::circle(center, spacing::XXS);
                frame.fill(&marker, faded(palette::GOLD, alpha));
            }

            let mut text_left = left;
            if let Some(icon) = &element.icon {
                let (scale, icon_opacity) = self.surface.icon_pulse(panel.slide, element_ref);
                let icon_size = typography::BODY * scale;
                frame.fill_text(Text {
                    content: icon.clone(),
                    position: Point::new(left, row_top + (sizing::ELEMENT_ROW - icon_size) / 2.0),
                    color: faded(palette::GOLD, alpha * icon_opacity),
                    size: icon_size.into(),
                    ..Text::default()
                });
                text_left += sizing::ICON_LG;
            }

            frame.fill_text(Text {
                content: element.text.clone(),
                position: Point::new(
                    text_left,
                    row_top + (sizing::ELEMENT_ROW - typography::BODY) / 2.0,
                ),
                color: faded(category_ink(group.category), alpha),
                size: typography::BODY.into(),
                ..Text::default()
            });

            y += sizing::ELEMENT_ROW;
        }
        y
    }

    fn draw_decorations(&self, frame: &mut Frame, size: Size, alpha: f32) {
        let inset = spacing::MD;
        let border_path = Path::rectangle(
            Point::new(inset, inset),
            Size::new(size.width - inset * 2.0, size.height - inset * 2.0),
        );
        frame.stroke(
            &border_path,
            Stroke::default()
                .with_width(border::FRAME)
                .with_color(faded(palette::GOLD, alpha * opacity::STRONG)),
        );

        let (dx, dy, tilt) = animation::drift(self.surface.ornament_phase());
        let shield_at = Point::new(size.width - spacing::XXL * 2.0 + dx, spacing::XXL * 2.0 + dy);
        let sword_at = Point::new(spacing::XXL * 2.0 - dx, size.height - spacing::XXL * 2.0 - dy);

        frame.with_save(|frame| {
            frame.translate(Vector::new(shield_at.x, shield_at.y));
            frame.rotate(tilt);
            draw_shield(frame, faded(palette::BURGUNDY, alpha * opacity::MEDIUM));
        });
        frame.with_save(|frame| {
            frame.translate(Vector::new(sword_at.x, sword_at.y));
            frame.rotate(-tilt - 0.6);
            draw_sword(frame, faded(palette::STEEL, alpha * opacity::MEDIUM));
        });
    }
}

fn draw_shield(frame: &mut Frame, color: Color) {
    let w = sizing::ICON_XL / 2.0;
    let shield = Path::new(|builder| {
        builder.move_to(Point::new(-w, -w));
        builder.line_to(Point::new(w, -w));
        builder.line_to(Point::new(w, 0.0));
        builder.quadratic_curve_to(Point::new(w, w), Point::new(0.0, w * 1.4));
        builder.quadratic_curve_to(Point::new(-w, w), Point::new(-w, 0.0));
        builder.close();
    });
    frame.fill(&shield, color);
    frame.stroke(
        &shield,
        Stroke::default()
            .with_width(border::WIDTH_MD)
            .with_color(Color { a: color.a, ..palette::GOLD }),
    );
}

fn draw_sword(frame: &mut Frame, color: Color) {
    let length = sizing::ICON_XL * 1.5;
    let blade = Path::line(Point::new(0.0, -length / 2.0), Point::new(0.0, length / 2.0));
    let guard = Path::line(
        Point::new(-spacing::SM, length / 4.0),
        Point::new(spacing::SM, length / 4.0),
    );
    let stroke = Stroke::default()
        .with_width(border::WIDTH_MD * 2.0)
        .with_color(color)
        .with_line_cap(canvas::LineCap::Round);
    frame.stroke(&blade, stroke);
    frame.stroke(&guard, stroke);
}

fn fill_centered(frame: &mut Frame, content: &str, y: f32, width: f32, size: f32, color: Color) {
    let estimated = content.chars().count() as f32 * size * GLYPH_ADVANCE;
    let x = ((width - estimated) / 2.0).max(spacing::LG);
    frame.fill_text(Text {
        content: content.to_owned(),
        position: Point::new(x, y),
        color,
        size: size.into(),
        ..Text::default()
    });
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

fn category_fill(category: ElementCategory) -> Option<Color> {
    match category {
        ElementCategory::Card | ElementCategory::Feature => Some(palette::PARCHMENT_DARK),
        ElementCategory::Note => Some(palette::GOLD),
        ElementCategory::Media => Some(palette::STEEL),
        ElementCategory::Text | ElementCategory::Timeline | ElementCategory::KeyPoint => None,
    }
}

fn category_ink(category: ElementCategory) -> Color {
    match category {
        ElementCategory::KeyPoint => palette::BURGUNDY,
        ElementCategory::Note | ElementCategory::Timeline => palette::INK_SOFT,
        _ => palette::INK,
    }
}
