// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens for the slide stage and its controls.

## Organization

- **Palette**: Base colors (parchment, ink, heraldic accents)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii

## Examples

```
use iced_slides::ui::design_tokens::{palette, spacing};

let ink = palette::INK;
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Stage
    pub const BACKDROP: Color = Color::from_rgb(0.11, 0.09, 0.08);
    pub const PARCHMENT: Color = Color::from_rgb(0.95, 0.90, 0.79);
    pub const PARCHMENT_DARK: Color = Color::from_rgb(0.86, 0.78, 0.62);
    pub const INK: Color = Color::from_rgb(0.20, 0.14, 0.10);
    pub const INK_SOFT: Color = Color::from_rgb(0.38, 0.30, 0.24);

    // Heraldic accents
    pub const GOLD: Color = Color::from_rgb(0.79, 0.62, 0.23);
    pub const BURGUNDY: Color = Color::from_rgb(0.50, 0.11, 0.15);
    pub const STEEL: Color = Color::from_rgb(0.55, 0.58, 0.62);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SUBTLE: f32 = 0.2;
    pub const MEDIUM: f32 = 0.5;
    pub const STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Card and note backgrounds over the parchment.
    pub const SURFACE: f32 = 0.35;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    /// Position dot diameter.
    pub const DOT: f32 = 12.0;
    /// Height of the controls bar under the stage.
    pub const CONTROLS_HEIGHT: f32 = 56.0;
    /// Progress bar thickness.
    pub const PROGRESS_HEIGHT: f32 = 4.0;
    /// Row height of one slide element.
    pub const ELEMENT_ROW: f32 = 40.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Title slide heading
    pub const DISPLAY: f32 = 56.0;

    /// Content slide heading
    pub const TITLE: f32 = 36.0;

    /// Element text
    pub const BODY: f32 = 20.0;

    /// Final message
    pub const EMPHASIS: f32 = 26.0;

    /// Control labels
    pub const CAPTION: f32 = 14.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
    /// Ornamental frame around decorated slides.
    pub const FRAME: f32 = 6.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::DISPLAY > typography::TITLE);
    assert!(typography::TITLE > typography::EMPHASIS);
    assert!(typography::EMPHASIS > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::FRAME > border::WIDTH_MD);
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    assert!(sizing::ELEMENT_ROW > typography::BODY);
};
