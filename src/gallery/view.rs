// SPDX-License-Identifier: MPL-2.0
//! Widget tree for the gallery: main carousel with previous/next overlay,
//! thumbnail strip and position caption.

use super::empty_state;
use super::render::{self, SlideModel, ThumbModel};
use super::{Message, State, MAIN_SCROLLABLE_ID, THUMBS_SCROLLABLE_ID, VIEWPORT_PADDING};
use crate::domain::gallery::StyleHint;
use crate::i18n::fluent::I18n;
use crate::media::Variant;
use crate::ui::design_tokens::{border, opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::wheel_stepper;
use iced::alignment::{Horizontal, Vertical};
use iced::mouse;
use iced::widget::image::{self, Image};
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{button, mouse_area, tooltip, Column, Container, Id, Row, Scrollable, Stack, Text};
use iced::{ContentFit, Element, Length};
use std::path::Path;

/// Environment information required to render the gallery.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, Copy)]
struct Corners {
    slide: f32,
    thumb: f32,
}

impl Corners {
    fn for_style(style: StyleHint) -> Self {
        if style.square {
            Self {
                slide: radius::NONE,
                thumb: radius::NONE,
            }
        } else {
            Self {
                slide: radius::LG,
                thumb: radius::MD,
            }
        }
    }
}

pub(super) fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    if state.images.is_empty() {
        return empty_state::view(env.i18n);
    }
    // Nothing to lay out until the window reports its size.
    let Some(width) = state.viewport_width else {
        return Column::new().into();
    };

    let selected = state.selected_index();
    let model = render::render(&state.images, selected, env.i18n);
    let corners = Corners::for_style(state.style);

    let main = main_carousel(state, model.slides, width, corners, env.i18n);
    let thumbs = thumb_strip(state, model.thumbs, corners);

    let current = (selected + 1).to_string();
    let total = state.images.len().to_string();
    let position = Text::new(env.i18n.tr_with_args(
        "gallery-position",
        &[("current", current.as_str()), ("total", total.as_str())],
    ))
    .size(typography::CAPTION)
    .color(palette::GRAY_400);

    Column::new()
        .spacing(spacing::SM)
        .padding(VIEWPORT_PADDING)
        .align_x(Horizontal::Center)
        .push(main)
        .push(thumbs)
        .push(position)
        .into()
}

fn main_carousel<'a>(
    state: &'a State,
    slides: Vec<SlideModel>,
    width: f32,
    corners: Corners,
    i18n: &I18n,
) -> Element<'a, Message> {
    let height = state.layout.slide_height.value();

    let row = Row::with_children(
        slides
            .into_iter()
            .map(|model| slide(state, model, width, height, corners.slide, i18n)),
    );

    let scrollable = Scrollable::new(row)
        .id(Id::new(MAIN_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .direction(Direction::Horizontal(Scrollbar::hidden()));

    let interaction = if state.main.is_dragging() {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    };

    let draggable = mouse_area(scrollable)
        .on_press(Message::PointerPressed)
        .on_release(Message::PointerReleased)
        .on_move(Message::PointerMoved)
        .on_exit(Message::PointerLeft)
        .interaction(interaction);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .push(wheel_stepper(draggable, Message::Wheel));

    if state.main.can_scroll_prev() {
        stack = stack.push(nav_button(
            "◀",
            Message::Previous,
            Horizontal::Left,
            i18n.tr("gallery-previous"),
        ));
    }
    if state.main.can_scroll_next() {
        stack = stack.push(nav_button(
            "▶",
            Message::Next,
            Horizontal::Right,
            i18n.tr("gallery-next"),
        ));
    }

    stack.into()
}

fn slide<'a>(
    state: &'a State,
    model: SlideModel,
    width: f32,
    height: f32,
    corner: f32,
    i18n: &I18n,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = if state.failed.contains(&(model.path.clone(), Variant::Slide))
    {
        let caption = Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(
                Text::new(i18n.tr("gallery-image-unavailable"))
                    .size(styles::container::PLACEHOLDER_TEXT_SIZE),
            )
            .push(Text::new(model.alt).size(styles::container::PLACEHOLDER_TEXT_SIZE));

        Container::new(caption)
            .center(Length::Fill)
            .style(styles::container::placeholder(corner))
            .into()
    } else {
        Image::new(handle_for(state, &model.path, Variant::Slide))
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    };

    Container::new(content)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .clip(true)
        .style(styles::container::slide(corner))
        .into()
}

fn nav_button<'a>(
    glyph: &'static str,
    message: Message,
    side: Horizontal,
    tip: String,
) -> Element<'a, Message> {
    let arrow = button(Container::new(Text::new(glyph).size(typography::TITLE_SM)).center(Length::Fill))
        .width(Length::Fixed(sizing::NAV_BUTTON))
        .height(Length::Fixed(sizing::NAV_BUTTON))
        .padding(0)
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
        ))
        .on_press(message);

    Container::new(styles::tooltip::styled(arrow, tip, tooltip::Position::Bottom))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(side)
        .align_y(Vertical::Center)
        .into()
}

fn thumb_strip<'a>(
    state: &'a State,
    thumbs: Vec<ThumbModel>,
    corners: Corners,
) -> Element<'a, Message> {
    let variant = state.thumb_variant();
    let row = Row::with_children(
        thumbs
            .into_iter()
            .map(|model| thumbnail(state, model, variant, corners.thumb)),
    )
    .spacing(state.layout.thumb_gap.value());

    Scrollable::new(row)
        .id(Id::new(THUMBS_SCROLLABLE_ID))
        .width(Length::Fill)
        .direction(Direction::Horizontal(Scrollbar::hidden()))
        .on_scroll(|viewport: Viewport| Message::ThumbsScrolled(viewport.absolute_offset().x))
        .into()
}

fn thumbnail<'a>(
    state: &'a State,
    model: ThumbModel,
    variant: Variant,
    corner: f32,
) -> Element<'a, Message> {
    let size = state.layout.thumb_size;
    let borderless = state.style.borderless;

    let picture: Element<'a, Message> = if state.failed.contains(&(model.path.clone(), variant)) {
        Container::new(Text::new(model.alt).size(typography::CAPTION))
            .center(Length::Fill)
            .style(styles::container::placeholder(corner))
            .into()
    } else {
        let dimmed = borderless && !model.active;
        Image::new(handle_for(state, &model.path, variant))
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .opacity(if dimmed {
                opacity::OVERLAY_STRONG
            } else {
                opacity::OPAQUE
            })
            .into()
    };

    let pressable = button(picture)
        .width(Length::Fixed(size.width()))
        .height(Length::Fixed(size.height()))
        .padding(border::WIDTH_SM)
        .style(styles::button::thumbnail(model.active, corner, borderless))
        .on_press(Message::JumpTo(model.index));

    styles::tooltip::styled(pressable, model.label, tooltip::Position::Top).into()
}

/// Cached decode when available, otherwise a handle Iced decodes lazily.
fn handle_for(state: &State, path: &Path, variant: Variant) -> image::Handle {
    state
        .cache
        .peek(path, variant)
        .map_or_else(|| image::Handle::from_path(path), |data| data.handle.clone())
}
