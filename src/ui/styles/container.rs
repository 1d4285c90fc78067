// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, typography};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Frame around one main slide. Clips its image to rounded corners.
pub fn slide(corner_radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        border: Border {
            radius: corner_radius.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Stand-in shown while a slide is decoding or when it failed to decode.
///
/// Derived from the active theme's background so it reads as a neutral
/// surface in light and dark modes.
pub fn placeholder(corner_radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let weak = theme.extended_palette().background.weak.color;
        container::Style {
            background: Some(Background::Color(weak)),
            text_color: Some(Color {
                a: 0.7,
                ..palette::GRAY_400
            }),
            border: Border {
                radius: corner_radius.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Text size used inside placeholders.
pub const PLACEHOLDER_TEXT_SIZE: f32 = typography::CAPTION;
