// SPDX-License-Identifier: MPL-2.0
//! Gallery component: the main carousel, the thumbnail strip and the
//! controller that keeps them in step.
//!
//! Engine listeners are plain [`Message`] values. After every update the
//! component drains both engines and feeds the queued messages back through
//! `Task::done`, then issues scroll operations so the scrollable widgets
//! show the engines' offsets.

pub mod controller;
mod empty_state;
pub mod render;
mod view;

pub use controller::SyncController;
pub use view::ViewEnv;

use crate::app::config::{Config, LayoutConfig, WHEEL_LINES_PER_STEP};
use crate::carousel::{Engine, SlideMetrics};
use crate::domain::gallery::{GalleryImage, StyleHint};
use crate::domain::ui::{SlideHeight, ThumbnailGap, ThumbnailSize};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, CacheStats, ImageCache, ImageData, Variant};
use crate::source::GallerySource;
use crate::ui::design_tokens::spacing;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{Element, Point, Size, Task};
use std::collections::HashSet;
use std::path::PathBuf;

/// Identifier of the main carousel scrollable.
pub const MAIN_SCROLLABLE_ID: &str = "gallery-main-scrollable";
/// Identifier of the thumbnail strip scrollable.
pub const THUMBS_SCROLLABLE_ID: &str = "gallery-thumbs-scrollable";

/// Horizontal padding around both carousels.
pub const VIEWPORT_PADDING: f32 = spacing::MD;

/// Thumbnails are decoded at this multiple of their displayed edge.
const THUMB_DECODE_SCALE: u32 = 2;

/// Slides on each side of the selection decoded ahead of time.
const PREFETCH_RADIUS: usize = 1;

#[derive(Debug, Clone)]
pub enum Message {
    /// Queued by the main engine on `Select` and `ReInit`.
    MainSelectionChanged,
    /// A thumbnail was pressed.
    JumpTo(usize),
    Next,
    Previous,
    First,
    Last,
    /// Wheel movement over the main carousel, in forward lines.
    Wheel(f32),
    PointerMoved(Point),
    PointerPressed,
    PointerReleased,
    PointerLeft,
    /// Horizontal offset reported by the thumbnail scrollable.
    ThumbsScrolled(f32),
    ImageDecoded {
        path: PathBuf,
        variant: Variant,
        result: Result<ImageData, Error>,
    },
    /// Open button of the empty state.
    OpenRequested,
}

/// Side effects the application performs on behalf of the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    OpenFileDialog,
}

/// Sizes the view lays slides and thumbnails out with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub slide_height: SlideHeight,
    pub thumb_size: ThumbnailSize,
    pub thumb_gap: ThumbnailGap,
}

impl Layout {
    #[must_use]
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            slide_height: config.slide_height(),
            thumb_size: config.thumb_size(),
            thumb_gap: config.thumb_gap(),
        }
    }

    /// Applies the compact scale of `style`.
    #[must_use]
    pub fn styled(self, style: StyleHint) -> Self {
        let factor = style.size_factor();
        Self {
            slide_height: self.slide_height.scaled(factor),
            thumb_size: self.thumb_size.scaled(factor),
            thumb_gap: ThumbnailGap::new(self.thumb_gap.value() * factor),
        }
    }
}

/// Gallery state: images, both engines, the controller and decoded media.
pub struct State {
    images: Vec<GalleryImage>,
    style: StyleHint,
    base_layout: Layout,
    layout: Layout,
    main: Engine<Message>,
    thumbs: Engine<Message>,
    controller: SyncController,
    cache: ImageCache,
    /// Thumbnails decoded up front; half the cache's image slots.
    thumb_budget: usize,
    pending: HashSet<(PathBuf, Variant)>,
    failed: HashSet<(PathBuf, Variant)>,
    viewport_width: Option<f32>,
    cursor: Option<Point>,
    wheel_lines: f32,
    torn_down: bool,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("images", &self.images.len())
            .field("selected", &self.controller.selected_index())
            .field("main", &self.main)
            .field("thumbs", &self.thumbs)
            .finish_non_exhaustive()
    }
}

impl State {
    /// Builds an unmounted gallery. Engines become ready on the first
    /// [`State::resize`].
    #[must_use]
    pub fn new(config: &Config, source: GallerySource, start_index: usize) -> Self {
        let base_layout = Layout::from_config(&config.layout);
        Self {
            layout: base_layout.styled(source.style),
            base_layout,
            images: source.images,
            style: source.style,
            main: Engine::new(config.main_carousel.with_start_index(start_index)),
            thumbs: Engine::new(config.thumbs_carousel),
            controller: SyncController::new(),
            cache: ImageCache::new(config.cache.budget()),
            thumb_budget: config.cache.budget().max_images() / 2,
            pending: HashSet::new(),
            failed: HashSet::new(),
            viewport_width: None,
            cursor: None,
            wheel_lines: 0.0,
            torn_down: false,
        }
    }

    #[must_use]
    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn style(&self) -> StyleHint {
        self.style
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.controller.selected_index()
    }

    /// Whether both engines are laid out and the controller is listening.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.controller.is_mounted()
    }

    #[must_use]
    pub fn main_engine(&self) -> &Engine<Message> {
        &self.main
    }

    #[must_use]
    pub fn thumbs_engine(&self) -> &Engine<Message> {
        &self.thumbs
    }

    /// Decode cache counters. Every decode request counts as one lookup.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Tasks to run right after boot: the priority slide and thumbnails.
    pub fn initial_tasks(&mut self) -> Task<Message> {
        self.decode_for_new_images()
    }

    /// Lays both engines out for a new window size.
    ///
    /// The first call makes the engines ready and mounts the controller.
    pub fn resize(&mut self, window: Size) -> Task<Message> {
        if self.torn_down {
            return Task::none();
        }
        let width = (window.width - 2.0 * VIEWPORT_PADDING).max(1.0);
        if self.viewport_width == Some(width) {
            return Task::none();
        }
        self.viewport_width = Some(width);
        self.layout_engines(false);

        let mut prefetch = Task::none();
        if self.main.is_ready() && !self.controller.is_mounted() {
            self.controller.mount(
                &mut self.main,
                &mut self.thumbs,
                Message::MainSelectionChanged,
            );
            tracing::debug!(
                selected = self.controller.selected_index(),
                "gallery mounted"
            );
            prefetch = self.prefetch_around_selection();
        }

        self.finish(prefetch)
    }

    /// Replaces the image list and re-initializes both engines.
    ///
    /// Selection returns to the first image once the main engine reports
    /// its re-initialization.
    pub fn replace_images(&mut self, source: GallerySource) -> Task<Message> {
        if self.torn_down {
            return Task::none();
        }
        tracing::info!(count = source.images.len(), "replacing gallery images");
        self.images = source.images;
        self.style = source.style;
        self.layout = self.base_layout.styled(source.style);
        self.failed.clear();
        self.cursor = None;
        self.wheel_lines = 0.0;
        self.layout_engines(true);

        let decode = self.decode_for_new_images();
        self.finish(decode)
    }

    /// Unmounts the controller, destroys both engines and releases decoded
    /// images.
    ///
    /// Safe to call more than once; also runs on drop.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.controller.unmount(&mut self.main);
        self.main.destroy();
        self.thumbs.destroy();

        let stats = self.cache.stats();
        tracing::debug!(
            hits = stats.hits,
            misses = stats.misses,
            evictions = stats.evictions,
            cached = self.cache.len(),
            bytes = self.cache.memory_usage(),
            "gallery torn down"
        );
        self.cache.clear();
        self.pending.clear();
    }

    pub fn handle_message(&mut self, message: Message, _i18n: &I18n) -> (Effect, Task<Message>) {
        let task = match message {
            Message::MainSelectionChanged => {
                self.controller
                    .on_main_selection_changed(&self.main, &mut self.thumbs);
                self.prefetch_around_selection()
            }
            Message::JumpTo(index) => {
                self.controller.jump_to(&mut self.main, index);
                Task::none()
            }
            Message::Next => {
                self.main.scroll_next();
                Task::none()
            }
            Message::Previous => {
                self.main.scroll_prev();
                Task::none()
            }
            Message::First => {
                self.controller.jump_to(&mut self.main, 0);
                Task::none()
            }
            Message::Last => {
                let last = self.images.len().saturating_sub(1);
                self.controller.jump_to(&mut self.main, last);
                Task::none()
            }
            Message::Wheel(lines) => {
                self.step_wheel(lines);
                Task::none()
            }
            Message::PointerMoved(position) => {
                self.cursor = Some(position);
                if !self.main.is_dragging() {
                    return (Effect::None, Task::none());
                }
                self.main.drag_move(position.x);
                Task::none()
            }
            Message::PointerPressed => {
                if let Some(position) = self.cursor {
                    self.main.drag_start(position.x);
                }
                Task::none()
            }
            Message::PointerReleased => {
                self.main.drag_end();
                Task::none()
            }
            Message::PointerLeft => {
                self.cursor = None;
                self.main.drag_end();
                Task::none()
            }
            Message::ThumbsScrolled(offset) => {
                self.thumbs.scrolled(offset);
                // The widget already shows this offset.
                return (Effect::None, self.drain_events());
            }
            Message::ImageDecoded {
                path,
                variant,
                result,
            } => {
                self.file_decoded(path, variant, result);
                return (Effect::None, Task::none());
            }
            Message::OpenRequested => return (Effect::OpenFileDialog, Task::none()),
        };

        (Effect::None, self.finish(task))
    }

    /// Builds the widget tree.
    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        view::view(self, env)
    }

    fn layout_engines(&mut self, replaced: bool) {
        let Some(width) = self.viewport_width else {
            return;
        };
        let count = self.images.len();
        let main = SlideMetrics::uniform(count, width, 0.0, width);
        let thumbs = SlideMetrics::uniform(
            count,
            self.layout.thumb_size.width(),
            self.layout.thumb_gap.value(),
            width,
        );

        // Thumbs first so the main engine's ReInit finds them laid out.
        if replaced {
            self.thumbs.reset(&thumbs);
            self.main.reset(&main);
        } else {
            self.thumbs.reinit(&thumbs);
            self.main.reinit(&main);
        }
    }

    fn step_wheel(&mut self, lines: f32) {
        if lines == 0.0 {
            return;
        }
        if self.wheel_lines != 0.0 && self.wheel_lines.signum() != lines.signum() {
            self.wheel_lines = 0.0;
        }
        self.wheel_lines += lines;

        if self.wheel_lines >= WHEEL_LINES_PER_STEP {
            self.wheel_lines = 0.0;
            self.main.scroll_next();
        } else if self.wheel_lines <= -WHEEL_LINES_PER_STEP {
            self.wheel_lines = 0.0;
            self.main.scroll_prev();
        }
    }

    /// Queued engine events, then scroll operations for both widgets.
    fn finish(&mut self, task: Task<Message>) -> Task<Message> {
        Task::batch([task, self.drain_events(), self.scroll_tasks()])
    }

    fn drain_events(&mut self) -> Task<Message> {
        let mut events = self.main.take_events();
        events.extend(self.thumbs.take_events());
        Task::batch(events.into_iter().map(Task::done))
    }

    fn scroll_tasks(&self) -> Task<Message> {
        if !self.main.is_ready() {
            return Task::none();
        }
        Task::batch([
            operation::snap_to(
                Id::new(MAIN_SCROLLABLE_ID),
                RelativeOffset {
                    x: self.main.scroll_progress(),
                    y: 0.0,
                },
            ),
            operation::snap_to(
                Id::new(THUMBS_SCROLLABLE_ID),
                RelativeOffset {
                    x: self.thumbs.scroll_progress(),
                    y: 0.0,
                },
            ),
        ])
    }

    fn thumb_variant(&self) -> Variant {
        Variant::Thumbnail {
            max_edge: self.layout.thumb_size.max_edge() * THUMB_DECODE_SCALE,
        }
    }

    /// Priority slide first, then as many thumbnails as the cache can hold
    /// next to the slides.
    fn decode_for_new_images(&mut self) -> Task<Message> {
        let mut tasks = Vec::new();
        if let Some(first) = self.images.first() {
            tasks.extend(self.request_decode(first.path(), Variant::Slide));
        }

        let variant = self.thumb_variant();
        let paths: Vec<PathBuf> = self
            .images
            .iter()
            .take(self.thumb_budget)
            .map(GalleryImage::path)
            .collect();
        for path in paths {
            tasks.extend(self.request_decode(path, variant));
        }

        Task::batch(tasks)
    }

    fn prefetch_around_selection(&mut self) -> Task<Message> {
        if self.images.is_empty() {
            return Task::none();
        }
        let selected = self.controller.selected_index();
        let first = selected.saturating_sub(PREFETCH_RADIUS);
        let last = (selected + PREFETCH_RADIUS).min(self.images.len() - 1);

        let paths: Vec<PathBuf> = self.images[first..=last]
            .iter()
            .map(GalleryImage::path)
            .collect();
        Task::batch(
            paths
                .into_iter()
                .filter_map(|path| self.request_decode(path, Variant::Slide)),
        )
    }

    fn request_decode(&mut self, path: PathBuf, variant: Variant) -> Option<Task<Message>> {
        if self.failed.contains(&(path.clone(), variant)) {
            return None;
        }
        // Also refreshes the entry so prefetched neighbours stay cached.
        if self.cache.get(&path, variant).is_some() {
            return None;
        }
        if !self.pending.insert((path.clone(), variant)) {
            return None;
        }
        Some(Task::perform(
            media::decode(path, variant),
            |(path, variant, result)| Message::ImageDecoded {
                path,
                variant,
                result,
            },
        ))
    }

    fn file_decoded(&mut self, path: PathBuf, variant: Variant, result: Result<ImageData, Error>) {
        self.pending.remove(&(path.clone(), variant));
        match result {
            Ok(image) => {
                if !self.cache.insert(path.clone(), variant, image) {
                    tracing::debug!(path = %path.display(), "decoded image too large to cache");
                }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), ?variant, error = %err, "failed to decode image");
                self.failed.insert((path, variant));
            }
        }
    }
}

impl Drop for State {
    fn drop(&mut self) {
        self.teardown();
    }
}
