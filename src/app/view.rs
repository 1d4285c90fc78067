// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::ui::notice::Notice;
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub notice: Option<&'a Notice>,
}

/// Renders the gallery with the notice toast on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = ctx
        .gallery
        .view(gallery::ViewEnv { i18n: ctx.i18n })
        .map(Message::Gallery);

    let base = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill);

    match ctx.notice {
        Some(notice) => Stack::new()
            .push(base)
            .push(notice.view(ctx.i18n, Message::DismissNotice))
            .into(),
        None => base.into(),
    }
}
