// SPDX-License-Identifier: MPL-2.0
//! Engine options, shared with the `[main_carousel]` and `[thumbs_carousel]`
//! sections of the settings file.

use serde::{Deserialize, Deserializer, Serialize};

/// Where a slide sits inside the viewport when it is snapped to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

/// How snap points that would scroll past the content edges are handled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ContainScroll {
    /// Snaps are used as computed, even past the edges.
    None,
    /// Snaps are clamped to the scrollable range; duplicates are kept.
    KeepSnaps,
    /// Snaps are clamped to the scrollable range and duplicates collapsed.
    #[default]
    TrimSnaps,
}

/// Behavior switches for one engine instance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Options {
    #[serde(default)]
    pub align: Align,

    #[serde(default)]
    pub contain_scroll: ContainScroll,

    /// Free scrolling: drag release keeps the released offset instead of
    /// snapping back to a slide edge.
    #[serde(default)]
    pub drag_free: bool,

    /// Stepping past either end wraps around to the other end.
    #[serde(default)]
    pub loop_slides: bool,

    /// Snap selected on first initialization.
    #[serde(skip)]
    pub start_index: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self::main()
    }
}

impl Options {
    /// Defaults for the main slide carousel.
    #[must_use]
    pub fn main() -> Self {
        Self {
            align: Align::Start,
            contain_scroll: ContainScroll::TrimSnaps,
            drag_free: false,
            loop_slides: false,
            start_index: 0,
        }
    }

    /// Defaults for the thumbnail strip.
    #[must_use]
    pub fn thumbs() -> Self {
        Self {
            drag_free: true,
            ..Self::main()
        }
    }

    #[must_use]
    pub fn with_start_index(self, start_index: usize) -> Self {
        Self {
            start_index,
            ..self
        }
    }
}

/// A settings section as written: only the keys that are present.
#[derive(Debug, Deserialize)]
struct SectionOverrides {
    align: Option<Align>,
    contain_scroll: Option<ContainScroll>,
    drag_free: Option<bool>,
    loop_slides: Option<bool>,
}

impl SectionOverrides {
    fn over(self, preset: Options) -> Options {
        Options {
            align: self.align.unwrap_or(preset.align),
            contain_scroll: self.contain_scroll.unwrap_or(preset.contain_scroll),
            drag_free: self.drag_free.unwrap_or(preset.drag_free),
            loop_slides: self.loop_slides.unwrap_or(preset.loop_slides),
            start_index: preset.start_index,
        }
    }
}

/// Reads a `[main_carousel]` section; missing keys keep [`Options::main`].
pub fn deserialize_main_section<'de, D>(deserializer: D) -> Result<Options, D::Error>
where
    D: Deserializer<'de>,
{
    SectionOverrides::deserialize(deserializer).map(|section| section.over(Options::main()))
}

/// Reads a `[thumbs_carousel]` section; missing keys keep [`Options::thumbs`].
pub fn deserialize_thumbs_section<'de, D>(deserializer: D) -> Result<Options, D::Error>
where
    D: Deserializer<'de>,
{
    SectionOverrides::deserialize(deserializer).map(|section| section.over(Options::thumbs()))
}
