// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery;
use iced::{window, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    WindowOpened { id: window::Id, size: Size },
    WindowResized(Size),
    /// A file was dropped on the window. One message per file.
    FileDropped(PathBuf),
    /// Files picked in the open dialog; empty when cancelled.
    OpenFileDialogResult(Vec<PathBuf>),
    /// Periodic tick while a notice is shown or a drop is pending.
    Tick(Instant),
    DismissNotice,
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed from the launcher to the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP 47 form (e.g. `fr`).
    pub lang: Option<String>,
    /// Optional config directory override (for tests or portable setups).
    pub config_dir: Option<String>,
    /// Styling hint applied to every gallery source (e.g. `"compact square"`).
    pub style: Option<String>,
    /// Index of the slide selected when the gallery first appears.
    pub start_index: usize,
    /// Image files, directories and manifests to show.
    pub paths: Vec<PathBuf>,
}
