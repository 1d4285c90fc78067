// SPDX-License-Identifier: MPL-2.0
//! Image rendering collaborator: decoding, thumbnail variants and the
//! decoded image cache.
//!
//! The gallery only hands over a source, alt text and sizing hints; this
//! module turns sources into Iced image handles.

pub mod cache;
pub mod image;

pub use cache::{CacheStats, ImageCache, Variant};
pub use image::{decode, load_image, load_thumbnail, ImageData};

/// Supported image file extensions (lowercase).
pub mod extensions {
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
    ];
}

/// Returns whether `path` has a supported image extension.
#[must_use]
pub fn is_supported_image(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            extensions::IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}
