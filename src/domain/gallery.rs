// SPDX-License-Identifier: MPL-2.0
//! Gallery input types.

use std::path::PathBuf;

const FILE_URI_PREFIX: &str = "file://";

/// One image of the gallery, supplied by the caller as part of an ordered
/// sequence. Has no identity beyond its position and source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    source: String,
    alt_text: Option<String>,
}

impl GalleryImage {
    /// Creates an image without alt text.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: None,
        }
    }

    /// Attaches alt text. Blank text is treated as absent.
    #[must_use]
    pub fn with_alt(mut self, alt_text: impl Into<String>) -> Self {
        let alt_text = alt_text.into();
        self.alt_text = (!alt_text.trim().is_empty()).then_some(alt_text);
        self
    }

    /// Source string as supplied (path or `file://` URI).
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn alt_text(&self) -> Option<&str> {
        self.alt_text.as_deref()
    }

    /// Alt text, or `fallback` when none was supplied.
    #[must_use]
    pub fn alt_or(&self, fallback: impl FnOnce() -> String) -> String {
        self.alt_text.clone().unwrap_or_else(fallback)
    }

    /// Filesystem path the source points at.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        PathBuf::from(
            self.source
                .strip_prefix(FILE_URI_PREFIX)
                .unwrap_or(&self.source),
        )
    }

    /// Stable key of the main slide at position `index`.
    #[must_use]
    pub fn slide_key(&self, index: usize) -> String {
        format!("{}-{index}", self.source)
    }

    /// Stable key of the thumbnail at position `index`.
    #[must_use]
    pub fn thumb_key(&self, index: usize) -> String {
        format!("{}-thumb-{index}", self.source)
    }
}

/// Presentation tweaks parsed from the optional styling hint string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleHint {
    /// Smaller slides and thumbnails.
    pub compact: bool,
    /// Square corners instead of rounded ones.
    pub square: bool,
    /// No border on thumbnails; the active one is marked by opacity only.
    pub borderless: bool,
}

impl StyleHint {
    /// Parses a whitespace separated hint such as `"compact square"`.
    ///
    /// Returns the hint together with the tokens that were not recognized.
    #[must_use]
    pub fn parse(hint: &str) -> (Self, Vec<String>) {
        let mut style = Self::default();
        let mut unknown = Vec::new();

        for token in hint.split_whitespace() {
            match token.to_ascii_lowercase().as_str() {
                "compact" => style.compact = true,
                "square" => style.square = true,
                "borderless" => style.borderless = true,
                _ => unknown.push(token.to_string()),
            }
        }

        (style, unknown)
    }

    /// Scale applied to slide and thumbnail sizes.
    #[must_use]
    pub fn size_factor(self) -> f32 {
        if self.compact {
            0.75
        } else {
            1.0
        }
    }
}
