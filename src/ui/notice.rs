// SPDX-License-Identifier: MPL-2.0
//! Single-slot toast for non-fatal problems (unreadable settings, files that
//! could not be opened).
//!
//! Warnings dismiss themselves after a few seconds; errors stay until the
//! user closes them.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::{Duration, Instant};

const WARNING_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// `None` means manual dismiss.
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Warning => Some(WARNING_DURATION),
            Severity::Error => None,
        }
    }
}

/// A message shown to the user, stored as an i18n key.
#[derive(Debug, Clone)]
pub struct Notice {
    severity: Severity,
    message_key: String,
    created_at: Instant,
}

impl Notice {
    #[must_use]
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key, Instant::now())
    }

    #[must_use]
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key, Instant::now())
    }

    fn new(severity: Severity, message_key: impl Into<String>, created_at: Instant) -> Self {
        Self {
            severity,
            message_key: message_key.into(),
            created_at,
        }
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|duration| now.saturating_duration_since(self.created_at) >= duration)
    }

    /// Renders the toast in the bottom-right corner of its container.
    pub fn view<'a, Message: Clone + 'a>(
        &self,
        i18n: &I18n,
        on_dismiss: Message,
    ) -> Element<'a, Message> {
        let accent = self.severity.color();

        let dismiss = button(Text::new("×").size(typography::BODY_LG))
            .padding([0.0, spacing::XS])
            .style(button::text)
            .on_press(on_dismiss);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(Text::new(i18n.tr(&self.message_key)).size(typography::BODY))
                    .width(Length::Fill),
            )
            .push(dismiss);

        let toast = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_style(theme, accent));

        Container::new(toast)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

fn toast_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.base.color.into()),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
