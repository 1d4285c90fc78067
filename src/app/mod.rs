// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the gallery component.
//!
//! The `App` struct wires together the gallery, localization and settings,
//! and translates gallery effects and window events into tasks (open dialog,
//! dropped files, teardown on close).

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::source::GallerySource;
use crate::ui::notice::Notice;
use config::{
    Config, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    gallery: gallery::State,
    theme: Theme,
    /// Styling hint from the command line, applied to every opened source.
    style_override: Option<String>,
    window_id: Option<window::Id>,
    notice: Option<Notice>,
    /// Files dropped since the last tick; opened together as one gallery.
    dropped: Vec<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("gallery", &self.gallery)
            .field("window_id", &self.window_id)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
///
/// Close requests are routed through `update` so the gallery is torn down
/// before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires `Fn` for boot; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and the initial gallery, and starts decoding the
    /// priority slide.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        Self::with_config(flags, config, config_warning)
    }

    fn with_config(
        flags: Flags,
        config: Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut notice = config_warning.map(Notice::warning);

        let source = if flags.paths.is_empty() {
            GallerySource::default()
        } else {
            match update::load_source(
                &flags.paths,
                config.layout.sort_order,
                flags.style.as_deref(),
            ) {
                Ok(source) => source,
                Err(problem) => {
                    notice = Some(problem);
                    GallerySource::default()
                }
            }
        };

        tracing::info!(
            images = source.images.len(),
            locale = %i18n.current_locale(),
            "starting gallery"
        );

        let mut gallery = gallery::State::new(&config, source, flags.start_index);
        let task = gallery.initial_tasks().map(Message::Gallery);

        let app = Self {
            theme: config.general.theme_mode.resolve(),
            i18n,
            config,
            gallery,
            style_override: flags.style,
            window_id: None,
            notice,
            dropped: Vec::new(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let file_name = self
            .gallery
            .images()
            .get(self.gallery.selected_index())
            .and_then(|image| {
                image
                    .path()
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
            });

        match file_name {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.needs_tick());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery_message) => {
                let (effect, task) = self.gallery.handle_message(gallery_message, &self.i18n);
                let task = task.map(Message::Gallery);
                match effect {
                    gallery::Effect::None => task,
                    gallery::Effect::OpenFileDialog => {
                        Task::batch([task, update::open_file_dialog(&self.i18n)])
                    }
                }
            }
            Message::WindowOpened { id, size } => {
                self.window_id = Some(id);
                self.gallery.resize(size).map(Message::Gallery)
            }
            Message::WindowResized(size) => self.gallery.resize(size).map(Message::Gallery),
            Message::FileDropped(path) => {
                tracing::debug!(path = %path.display(), "file dropped");
                self.dropped.push(path);
                Task::none()
            }
            Message::OpenFileDialogResult(paths) => {
                if paths.is_empty() {
                    return Task::none();
                }
                self.open_paths(&paths)
            }
            Message::Tick(now) => {
                if self.notice.as_ref().is_some_and(|notice| notice.is_expired(now)) {
                    self.notice = None;
                }
                if self.dropped.is_empty() {
                    return Task::none();
                }
                let paths = std::mem::take(&mut self.dropped);
                self.open_paths(&paths)
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                self.gallery.teardown();
                window::close(id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            notice: self.notice.as_ref(),
        })
    }

    /// Replaces the gallery with `paths`, or shows why it could not.
    fn open_paths(&mut self, paths: &[PathBuf]) -> Task<Message> {
        match update::load_source(
            paths,
            self.config.layout.sort_order,
            self.style_override.as_deref(),
        ) {
            Ok(source) => {
                self.notice = None;
                self.gallery.replace_images(source).map(Message::Gallery)
            }
            Err(problem) => {
                self.notice = Some(problem);
                Task::none()
            }
        }
    }

    /// A notice can expire or dropped files are waiting to be opened.
    fn needs_tick(&self) -> bool {
        self.notice.is_some() || !self.dropped.is_empty()
    }
}
