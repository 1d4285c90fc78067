// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (empty state "open" button).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Previous/next buttons drawn over the main carousel.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            button::Status::Disabled => opacity::OVERLAY_SUBTLE,
            button::Status::Active => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Thumbnail selector.
///
/// The active thumbnail gets a border that contrasts with the theme (black
/// on light, white on dark); inactive ones keep a transparent border so the
/// strip does not shift. With `borderless`, the active thumbnail is marked
/// by full opacity instead and the others are dimmed.
pub fn thumbnail(
    active: bool,
    corner_radius: f32,
    borderless: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let is_light = matches!(theme, Theme::Light);
        let contrast = if is_light { BLACK } else { WHITE };
        let hovered = matches!(status, button::Status::Hovered);

        let border_color = match (active, borderless, hovered) {
            (_, true, _) => Color::TRANSPARENT,
            (true, false, _) => contrast,
            (false, false, true) => Color {
                a: opacity::OVERLAY_MEDIUM,
                ..contrast
            },
            (false, false, false) => Color::TRANSPARENT,
        };

        // Dims the image through the button's own background in borderless
        // mode; transparent otherwise.
        let veil = if borderless && !active && !hovered {
            Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..if is_light { WHITE } else { BLACK }
            }))
        } else {
            None
        };

        button::Style {
            background: veil,
            text_color: contrast,
            border: Border {
                color: border_color,
                width: border::WIDTH_SM,
                radius: corner_radius.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
