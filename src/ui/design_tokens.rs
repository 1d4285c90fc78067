// SPDX-License-Identifier: MPL-2.0
//! Design tokens of the gallery.
//!
//! Every color, spacing, size and radius the gallery's widgets and styles
//! use comes from here, so the carousels, the strip and the toast share one
//! scale.
//!
//! ```
//! use iced_gallery::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let veil = Color {
//!     a: opacity::OVERLAY_STRONG,
//!     ..palette::BLACK
//! };
//! let gutter = spacing::MD;
//! # let _ = (veil, gutter);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Tooltip background in dark themes, text in light ones.
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    /// Captions, placeholders and the empty state text.
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    /// Notice accents.
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Idle navigation buttons and the hover outline of thumbnails.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

/// Spacing on a 4px step.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    /// Gutter around both carousels.
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    /// Width of the notice toast.
    pub const TOAST_WIDTH: f32 = 340.0;

    /// Square previous/next buttons over the main carousel.
    pub const NAV_BUTTON: f32 = 40.0;
}

pub mod typography {
    /// Empty state title.
    pub const TITLE_LG: f32 = 30.0;
    /// Navigation arrows.
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    /// Position caption and thumbnail placeholders.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    /// Thumbnail outline; also the strip padding so the outline never
    /// shifts the images.
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast accent.
    pub const WIDTH_MD: f32 = 2.0;
}

/// Corner radii. Slides use `LG`, thumbnails `MD`, and the `square` style
/// hint drops both to `NONE`.
pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XS == spacing::XXS * 2.0);
    assert!(spacing::MD == spacing::XXS * 4.0);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);
    assert!(opacity::OVERLAY_STRONG < opacity::OPAQUE);

    assert!(sizing::NAV_BUTTON > spacing::LG);
    assert!(sizing::TOAST_WIDTH > sizing::NAV_BUTTON);

    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_corners_are_tighter_than_slide_corners() {
        assert!(radius::MD < radius::LG);
        assert!(radius::MD > border::WIDTH_SM);
    }

    #[test]
    fn nav_buttons_are_larger_than_their_glyphs() {
        assert!(sizing::NAV_BUTTON > typography::TITLE_SM * 2.0);
    }
}
