// SPDX-License-Identifier: MPL-2.0
//! Render model: what the gallery shows for a list of images and a selected
//! index, independent of any widget.

use crate::domain::gallery::GalleryImage;
use crate::i18n::fluent::I18n;
use std::path::PathBuf;

/// One full-bleed slide of the main carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideModel {
    pub key: String,
    pub path: PathBuf,
    pub alt: String,
    /// Decode eagerly; set for the first slide only.
    pub priority: bool,
}

/// One thumbnail selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbModel {
    pub key: String,
    pub index: usize,
    pub path: PathBuf,
    pub alt: String,
    /// Accessible label, e.g. "Go to slide 3".
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryModel {
    pub slides: Vec<SlideModel>,
    pub thumbs: Vec<ThumbModel>,
}

impl GalleryModel {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

/// Maps `images` to slides and thumbnails, marking the thumbnail at
/// `selected` as active.
///
/// Labels are 1-based. An out-of-range `selected` leaves every thumbnail
/// inactive.
#[must_use]
pub fn render(images: &[GalleryImage], selected: usize, i18n: &I18n) -> GalleryModel {
    let mut model = GalleryModel {
        slides: Vec::with_capacity(images.len()),
        thumbs: Vec::with_capacity(images.len()),
    };

    for (index, image) in images.iter().enumerate() {
        let number = (index + 1).to_string();
        let args = [("number", number.as_str())];
        let path = image.path();

        model.slides.push(SlideModel {
            key: image.slide_key(index),
            path: path.clone(),
            alt: image.alt_or(|| i18n.tr_with_args("gallery-slide-alt", &args)),
            priority: index == 0,
        });

        model.thumbs.push(ThumbModel {
            key: image.thumb_key(index),
            index,
            path,
            alt: image.alt_or(|| i18n.tr_with_args("gallery-thumb-alt", &args)),
            label: i18n.tr_with_args("gallery-thumb-label", &args),
            active: index == selected,
        });
    }

    model
}
